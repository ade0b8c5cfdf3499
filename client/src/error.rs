//! Error types for the Mediashelf client.
//!
//! - [`ConfigError`] - bad environment or flag values
//! - [`ApiError`] - transport and server failures talking to the records API
//! - [`CatalogError`] - shell operations on the current record list
//! - [`CliError`] - top-level command errors
//!
//! `From` conversions let `?` cross every layer boundary.

use mediashelf::{ModelError, RecordId};
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// API base is not an absolute http(s) URL.
    #[error("Invalid API base URL '{url}': {message}")]
    InvalidApiBase { url: String, message: String },

    /// Timeout is not a positive whole number of seconds.
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    /// Unknown log level name.
    #[error("Invalid log level '{0}': expected error, warn, info or debug")]
    InvalidLogLevel(String),
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the records API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Base URL cannot carry path segments.
    #[error("Cannot build request URL from '{0}'")]
    InvalidUrl(String),

    /// Body could not be encoded or decoded.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The submitted form failed validation; nothing was sent.
    #[error("{}", .0.join(" "))]
    Invalid(Vec<String>),

    /// No record with this id in the current list.
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Other model conversion failure.
    #[error(transparent)]
    Model(ModelError),

    /// Store call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<ModelError> for CatalogError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Invalid { errors } => CatalogError::Invalid(errors),
            other => CatalogError::Model(other),
        }
    }
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level errors returned by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Initial load failed; the message points at the configured backend.
    #[error(
        "Could not load records from {api_base}: {source}\n\
         Make sure the backend is running and MEDIASHELF_API_BASE is correct."
    )]
    Load {
        api_base: String,
        source: CatalogError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found invalid drafts.
    #[error("{0} record(s) failed validation")]
    InvalidRecords(usize),

    /// User declined a confirmation prompt.
    #[error("Aborted")]
    Aborted,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type ConfigResult<T> = Result<T, ConfigError>;

pub type ApiResult<T> = Result<T, ApiError>;

pub type CatalogResult<T> = Result<T, CatalogError>;

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_form_message_joins_with_space() {
        let err: CatalogError = ModelError::Invalid {
            errors: vec!["Title is required.".into(), "Status is required.".into()],
        }
        .into();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert_eq!(err.to_string(), "Title is required. Status is required.");
    }

    #[test]
    fn test_server_error_shows_message_only() {
        let err = ApiError::Server {
            status: 409,
            message: "Duplicate title".into(),
        };
        let cli: CliError = CatalogError::from(err).into();
        assert_eq!(cli.to_string(), "Duplicate title");
    }

    #[test]
    fn test_load_error_mentions_backend() {
        let err = CliError::Load {
            api_base: "http://localhost:5000/".into(),
            source: CatalogError::Api(ApiError::Server {
                status: 500,
                message: "Request failed (500)".into(),
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost:5000/"));
        assert!(msg.contains("Request failed (500)"));
        assert!(msg.contains("MEDIASHELF_API_BASE"));
    }
}
