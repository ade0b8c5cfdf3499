//! # Mediashelf - record validation and catalog statistics
//!
//! The pure core of the Mediashelf catalog manager. It validates candidate
//! entries before they are saved and derives statistics over a collection
//! of entries. Nothing in this crate performs I/O or keeps state between
//! calls; the client shell fetches records, calls in here, and renders the
//! results.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  RawForm    │────▶│ RecordDraft │────▶│  validate   │────▶ Vec<String>
//! │ (field text)│     │ (numbers)   │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!
//! ┌─────────────┐     ┌─────────────┐
//! │ [Record]    │────▶│  summarize  │────▶ StatsSummary
//! └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mediashelf::{summarize, validate, RawForm};
//!
//! let form = RawForm {
//!     title: "Heat".into(),
//!     kind: "Movie".into(),
//!     genre: "Crime".into(),
//!     year: "1995".into(),
//!     rating: "9".into(),
//!     status: "Completed".into(),
//!     notes: String::new(),
//! };
//! let draft = form.parse();
//! assert!(validate(&draft).is_empty());
//!
//! let record = draft.into_record(None).unwrap();
//! let stats = summarize(&[record]);
//! assert_eq!(stats.average_rating_label(), "9.0");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Model conversion errors
//! - [`models`] - Record, RecordDraft, RecordId, Status
//! - [`validation`] - Validator rules and messages
//! - [`stats`] - Statistics Aggregator
//! - [`form`] - Raw field text to candidate record
//! - [`filter`] - Title search and status filter for list views

// Core modules
pub mod error;
pub mod models;

// Rules
pub mod validation;

// Aggregation
pub mod stats;

// Input and list helpers
pub mod filter;
pub mod form;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ModelError, ModelResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Record, RecordDraft, RecordId, Status};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid, validate};

// =============================================================================
// Re-exports - Statistics
// =============================================================================

pub use stats::{summarize, StatsSummary, StatusCount, NO_DATA};

// =============================================================================
// Re-exports - Form and filter
// =============================================================================

pub use filter::{RecordFilter, StatusFilter};
pub use form::RawForm;
