//! Record validation.
//!
//! [`validate`] checks a [`RecordDraft`] against the catalog rules and
//! returns one message per violated rule. Rules are evaluated independently
//! and every failure is collected, so a caller can show all problems at
//! once. Message order follows rule order:
//!
//! | # | rule | message |
//! |---|------|---------|
//! | 1 | title non-empty after trim | [`TITLE_REQUIRED`] |
//! | 2 | type non-empty | [`TYPE_REQUIRED`] |
//! | 3 | genre non-empty after trim | [`GENRE_REQUIRED`] |
//! | 4 | year is a whole number | [`YEAR_NOT_WHOLE`] |
//! | 5 | year in 1900..=2100 | [`YEAR_OUT_OF_RANGE`] |
//! | 6 | status non-empty | [`STATUS_REQUIRED`] |
//! | 7 | rating, when present, is a whole number in 1..=10 | [`RATING_NOT_WHOLE`], [`RATING_OUT_OF_RANGE`] |
//!
//! Year and rating checks are independent of each other: `3000.5` fails
//! both the whole-number and the range rule. `NaN` (text that was not a
//! number) and an absent year are neither whole nor inside any range.
//!
//! # Example
//!
//! ```
//! use mediashelf::{validate, RecordDraft};
//!
//! let draft = RecordDraft {
//!     title: "Alien".into(),
//!     kind: "Movie".into(),
//!     genre: "Horror".into(),
//!     year: Some(1979.0),
//!     rating: None,
//!     status: "Planned".into(),
//!     notes: String::new(),
//! };
//! assert!(validate(&draft).is_empty());
//! ```

use std::ops::RangeInclusive;

use crate::models::RecordDraft;

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const TYPE_REQUIRED: &str = "Type is required.";
pub const GENRE_REQUIRED: &str = "Genre is required.";
pub const YEAR_NOT_WHOLE: &str = "Year must be a whole number.";
pub const YEAR_OUT_OF_RANGE: &str = "Year must be between 1900 and 2100.";
pub const STATUS_REQUIRED: &str = "Status is required.";
pub const RATING_NOT_WHOLE: &str = "Rating must be a whole number.";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 10.";

/// Accepted publication years.
pub const YEAR_RANGE: RangeInclusive<f64> = 1900.0..=2100.0;

/// Accepted ratings.
pub const RATING_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// Check a draft and return every violation message (empty = valid).
///
/// Never fails and never touches `notes`.
pub fn validate(draft: &RecordDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(TITLE_REQUIRED);
    }
    if draft.kind.is_empty() {
        errors.push(TYPE_REQUIRED);
    }
    if draft.genre.trim().is_empty() {
        errors.push(GENRE_REQUIRED);
    }

    if !draft.year.is_some_and(is_whole) {
        errors.push(YEAR_NOT_WHOLE);
    }
    if !draft.year.is_some_and(|y| YEAR_RANGE.contains(&y)) {
        errors.push(YEAR_OUT_OF_RANGE);
    }

    if draft.status.is_empty() {
        errors.push(STATUS_REQUIRED);
    }

    if let Some(rating) = draft.rating {
        if !is_whole(rating) {
            errors.push(RATING_NOT_WHOLE);
        }
        if !RATING_RANGE.contains(&rating) {
            errors.push(RATING_OUT_OF_RANGE);
        }
    }

    log::debug!("validated '{}': {} violation(s)", draft.title.trim(), errors.len());

    errors.into_iter().map(String::from).collect()
}

/// Quick check: true when [`validate`] reports nothing.
pub fn is_valid(draft: &RecordDraft) -> bool {
    validate(draft).is_empty()
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RecordDraft {
        RecordDraft {
            title: "The Wire".into(),
            kind: "Show".into(),
            genre: "Drama".into(),
            year: Some(2002.0),
            rating: None,
            status: "Watching".into(),
            notes: String::new(),
        }
    }

    fn with_year(year: f64) -> RecordDraft {
        RecordDraft {
            year: Some(year),
            ..valid()
        }
    }

    fn with_rating(rating: Option<f64>) -> RecordDraft {
        RecordDraft { rating, ..valid() }
    }

    #[test]
    fn test_valid_without_rating() {
        for year in [1900.0, 1999.0, 2100.0] {
            assert!(validate(&with_year(year)).is_empty(), "year {year}");
        }
        assert!(is_valid(&valid()));
    }

    #[test]
    fn test_required_fields() {
        let draft = RecordDraft {
            title: "  ".into(),
            kind: String::new(),
            genre: "\t".into(),
            status: String::new(),
            ..valid()
        };
        assert_eq!(
            validate(&draft),
            [TITLE_REQUIRED, TYPE_REQUIRED, GENRE_REQUIRED, STATUS_REQUIRED]
        );
    }

    #[test]
    fn test_year_just_outside_range() {
        assert_eq!(validate(&with_year(1899.0)), [YEAR_OUT_OF_RANGE]);
        assert_eq!(validate(&with_year(2101.0)), [YEAR_OUT_OF_RANGE]);
    }

    #[test]
    fn test_fractional_year() {
        assert_eq!(validate(&with_year(2000.5)), [YEAR_NOT_WHOLE]);
        assert_eq!(
            validate(&with_year(3000.5)),
            [YEAR_NOT_WHOLE, YEAR_OUT_OF_RANGE]
        );
    }

    #[test]
    fn test_unparseable_year() {
        assert_eq!(
            validate(&with_year(f64::NAN)),
            [YEAR_NOT_WHOLE, YEAR_OUT_OF_RANGE]
        );
        let missing = RecordDraft {
            year: None,
            ..valid()
        };
        assert_eq!(validate(&missing), [YEAR_NOT_WHOLE, YEAR_OUT_OF_RANGE]);
    }

    #[test]
    fn test_rating_rules() {
        assert_eq!(validate(&with_rating(Some(0.0))), [RATING_OUT_OF_RANGE]);
        assert_eq!(validate(&with_rating(Some(11.0))), [RATING_OUT_OF_RANGE]);
        assert_eq!(validate(&with_rating(Some(7.5))), [RATING_NOT_WHOLE]);
        assert_eq!(
            validate(&with_rating(Some(15.5))),
            [RATING_NOT_WHOLE, RATING_OUT_OF_RANGE]
        );
        assert_eq!(
            validate(&with_rating(Some(f64::NAN))),
            [RATING_NOT_WHOLE, RATING_OUT_OF_RANGE]
        );
        assert!(validate(&with_rating(None)).is_empty());
        assert!(validate(&with_rating(Some(1.0))).is_empty());
        assert!(validate(&with_rating(Some(10.0))).is_empty());
    }

    #[test]
    fn test_everything_wrong_accumulates() {
        let draft = RecordDraft {
            title: String::new(),
            kind: String::new(),
            genre: String::new(),
            year: Some(3000.5),
            rating: Some(15.5),
            status: String::new(),
            notes: "ignored".into(),
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.first().map(String::as_str), Some(TITLE_REQUIRED));
        assert_eq!(errors.last().map(String::as_str), Some(RATING_OUT_OF_RANGE));
    }
}
