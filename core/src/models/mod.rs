//! Domain models for the media catalog.
//!
//! - [`Record`] - a catalog entry as stored by the persistence layer
//! - [`RecordDraft`] - a candidate entry, numbers already parsed but not yet validated
//! - [`RecordId`] - opaque identifier assigned by the store
//! - [`Status`] - the four lifecycle statuses, in breakdown order

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};
use crate::validation::validate;

// =============================================================================
// Record Identification
// =============================================================================

/// Identifier assigned by the persistence layer.
///
/// Stores hand these out either as strings or as integers; both decode to
/// the same textual id so lookups compare like for like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecordId")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordId {
    Text(String),
    Integer(i64),
}

impl From<RawRecordId> for RecordId {
    fn from(raw: RawRecordId) -> Self {
        match raw {
            RawRecordId::Text(s) => RecordId(s),
            RawRecordId::Integer(n) => RecordId(n.to_string()),
        }
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Status
// =============================================================================

/// Lifecycle status of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Planned,
    Watching,
    Completed,
    Dropped,
}

impl Status {
    /// Every status, in the fixed order used by the status breakdown.
    pub const ALL: [Status; 4] = [
        Status::Planned,
        Status::Watching,
        Status::Completed,
        Status::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "Planned",
            Status::Watching => "Watching",
            Status::Completed => "Completed",
            Status::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    /// Exact, case-sensitive match on the status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

// =============================================================================
// Record (persisted)
// =============================================================================

/// A catalog entry as received from, or sent to, the persistence layer.
///
/// Decoding is lenient: missing or `null` text fields become empty strings
/// and a numeric field that is not a whole number decodes as absent, so a
/// sparse record from the store can always be summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Absent on records that were never saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    /// Media type tag (Movie, Show, Book...); the value space is owned by the caller.
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub genre: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub year: Option<i64>,
    /// `None` means "not rated"; 0 is never a valid rating.
    #[serde(default, deserialize_with = "whole_number")]
    pub rating: Option<i64>,
    /// Kept as text so statuses unknown to this client survive a round trip.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub notes: String,
}

impl Record {
    /// Parsed status, `None` when the stored text is not one of the four.
    pub fn status(&self) -> Option<Status> {
        self.status.parse().ok()
    }

    /// Candidate shape used when editing an existing entry.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            title: self.title.clone(),
            kind: self.kind.clone(),
            genre: self.genre.clone(),
            year: self.year.map(|y| y as f64),
            rating: self.rating.map(|r| r as f64),
            status: self.status.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Any non-string value reads as empty text.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

/// Only an integral JSON number reads as a value; strings, fractions and
/// anything else read as absent.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Number(n) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    }))
}

// =============================================================================
// RecordDraft (candidate)
// =============================================================================

/// A candidate entry as submitted by a user.
///
/// `year` and `rating` have already been parsed from text: `None` means the
/// field was left empty and `NaN` means the text was not a number. Nothing
/// here is guaranteed valid until [`validate`] returns no messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub genre: String,
    #[serde(default)]
    pub year: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub notes: String,
}

impl RecordDraft {
    /// Validate and convert into a [`Record`] ready to be persisted.
    ///
    /// Returns every violation message when the draft is invalid.
    pub fn into_record(self, id: Option<RecordId>) -> ModelResult<Record> {
        let errors = validate(&self);
        if !errors.is_empty() {
            return Err(ModelError::Invalid { errors });
        }

        Ok(Record {
            id,
            title: self.title,
            kind: self.kind,
            genre: self.genre,
            year: self.year.map(|y| y as i64),
            rating: self.rating.map(|r| r as i64),
            status: self.status,
            notes: self.notes,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
