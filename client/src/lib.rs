//! # Mediashelf client - the shell around the catalog core
//!
//! Fetches records from a remote records API, keeps the current list, and
//! hands it to the pure core in [`mediashelf`] for validation and
//! statistics. All I/O lives here.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CLI flags  │────▶│   Catalog   │────▶│ RecordStore │────▶ /api/records
//! │  (RawForm)  │     │ (records)   │     │ (RecordsApi)│
//! └─────────────┘     └──────┬──────┘     └─────────────┘
//!                            │
//!                            ▼
//!                    validate / summarize
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Defaults, `.env` and environment variables
//! - [`error`] - Layered error types
//! - [`logs`] - Terminal logger behind the `log` facade
//! - [`api`] - Records API client and the store trait
//! - [`catalog`] - Current record list and write operations
//! - [`files`] - Offline JSON inputs
//! - [`render`] - Terminal output

pub mod config;
pub mod error;
pub mod logs;

pub mod api;
pub mod catalog;

pub mod files;
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{RecordStore, RecordsApi};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{
    ApiError, ApiResult, CatalogError, CatalogResult, CliError, CliResult, ConfigError,
    ConfigResult,
};
pub use logs::{LogEntry, LogLevel};
