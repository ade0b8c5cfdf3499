//! Error types for the catalog core.
//!
//! The Validator and the Statistics Aggregator never fail: an invalid
//! record is reported as a list of messages and statistics are total over
//! any collection. Errors only appear at the edges of the model:
//!
//! - [`ModelError::UnknownStatus`] - text that is not one of the four statuses
//! - [`ModelError::Invalid`] - a draft that cannot become a [`crate::Record`]

use thiserror::Error;

// =============================================================================
// Model Errors
// =============================================================================

/// Errors raised when converting between model shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Status text outside {Planned, Watching, Completed, Dropped}.
    #[error("Unknown status: '{0}'")]
    UnknownStatus(String),

    /// The draft failed validation; carries every violation message.
    #[error("Invalid record: {}", errors.join(" "))]
    Invalid { errors: Vec<String> },
}

impl ModelError {
    /// Violation messages, empty for non-validation errors.
    pub fn violations(&self) -> &[String] {
        match self {
            ModelError::Invalid { errors } => errors,
            ModelError::UnknownStatus(_) => &[],
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for model conversions.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_joins_messages() {
        let err = ModelError::Invalid {
            errors: vec!["Title is required.".into(), "Genre is required.".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid record: Title is required. Genre is required."
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_unknown_status_format() {
        let err = ModelError::UnknownStatus("Paused".into());
        assert!(err.to_string().contains("Paused"));
        assert!(err.violations().is_empty());
    }
}
