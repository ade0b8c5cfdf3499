//! Raw form input.
//!
//! A [`RawForm`] holds field values exactly as a user typed them. Parsing
//! turns it into a [`RecordDraft`] whose numeric fields are numbers or
//! absent; parse failures are kept as `NaN` so the Validator reports them
//! instead of the parser rejecting them.

use serde::{Deserialize, Serialize};

use crate::models::{Record, RecordDraft};

/// Unparsed field values for a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForm {
    pub title: String,
    pub kind: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub status: String,
    pub notes: String,
}

impl RawForm {
    /// Prefill the form from a stored record, as the edit view does.
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            kind: record.kind.clone(),
            genre: record.genre.clone(),
            year: record.year.map(|y| y.to_string()).unwrap_or_default(),
            rating: record.rating.map(|r| r.to_string()).unwrap_or_default(),
            status: record.status.clone(),
            notes: record.notes.clone(),
        }
    }

    /// Parse into a candidate record.
    ///
    /// Title, genre and notes are trimmed; type and status are kept
    /// verbatim. An empty rating means "not rated".
    pub fn parse(&self) -> RecordDraft {
        RecordDraft {
            title: self.title.trim().to_string(),
            kind: self.kind.clone(),
            genre: self.genre.trim().to_string(),
            year: parse_number(&self.year),
            rating: parse_number(&self.rating),
            status: self.status.clone(),
            notes: self.notes.trim().to_string(),
        }
    }
}

/// Empty (after trim) -> `None`; unparseable -> `Some(NaN)`.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.parse::<f64>().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, RATING_NOT_WHOLE, RATING_OUT_OF_RANGE, YEAR_NOT_WHOLE};

    fn form() -> RawForm {
        RawForm {
            title: "  Blade Runner ".into(),
            kind: "Movie".into(),
            genre: " Sci-Fi".into(),
            year: " 1982 ".into(),
            rating: String::new(),
            status: "Completed".into(),
            notes: " director's cut  ".into(),
        }
    }

    #[test]
    fn test_parse_trims_and_converts() {
        let draft = form().parse();
        assert_eq!(draft.title, "Blade Runner");
        assert_eq!(draft.genre, "Sci-Fi");
        assert_eq!(draft.notes, "director's cut");
        assert_eq!(draft.year, Some(1982.0));
        assert_eq!(draft.rating, None);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_bad_number_text_reaches_validator() {
        let mut raw = form();
        raw.rating = "great".into();
        let draft = raw.parse();
        assert!(draft.rating.is_some_and(f64::is_nan));
        assert_eq!(validate(&draft), [RATING_NOT_WHOLE, RATING_OUT_OF_RANGE]);

        raw = form();
        raw.year = "1982.5".into();
        assert_eq!(validate(&raw.parse()), [YEAR_NOT_WHOLE]);
    }

    #[test]
    fn test_blank_rating_is_not_rated() {
        let mut raw = form();
        raw.rating = "   ".into();
        assert_eq!(raw.parse().rating, None);
    }

    #[test]
    fn test_from_record_roundtrip() {
        let record = form().parse().into_record(None).unwrap();
        let refilled = RawForm::from_record(&record);
        assert_eq!(refilled.year, "1982");
        assert_eq!(refilled.rating, "");
        assert_eq!(refilled.parse(), record.to_draft());
    }
}
