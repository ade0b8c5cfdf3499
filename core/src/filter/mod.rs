//! List view filtering by title search and status.

use std::convert::Infallible;
use std::str::FromStr;

use crate::models::Record;

/// Status half of a list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Exact status text; unknown statuses are allowed and simply match nothing known.
    Only(String),
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    /// "ALL" (any case) selects every status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Only(s.to_string()))
        }
    }
}

/// Title search plus status selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl RecordFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_ok = record.title.to_lowercase().contains(&query);
        let status_ok = match &self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => &record.status == status,
        };
        text_ok && status_ok
    }

    /// Matching records, input order preserved.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, status: &str) -> Record {
        Record {
            id: None,
            title: title.into(),
            kind: "Book".into(),
            genre: "Fantasy".into(),
            year: Some(1954),
            rating: None,
            status: status.into(),
            notes: String::new(),
        }
    }

    fn shelf() -> Vec<Record> {
        vec![
            record("The Fellowship of the Ring", "Completed"),
            record("The Two Towers", "Watching"),
            record("The Return of the King", "Planned"),
            record("The Hobbit", "Completed"),
        ]
    }

    fn titles(records: Vec<&Record>) -> Vec<&str> {
        records.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_default_matches_everything() {
        let records = shelf();
        assert_eq!(RecordFilter::default().apply(&records).len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let records = shelf();
        let filter = RecordFilter::new("  KING ", StatusFilter::All);
        assert_eq!(titles(filter.apply(&records)), ["The Return of the King"]);
    }

    #[test]
    fn test_status_and_query_combine() {
        let records = shelf();
        let completed: StatusFilter = "Completed".parse().unwrap();
        assert_eq!(
            titles(RecordFilter::new("", completed.clone()).apply(&records)),
            ["The Fellowship of the Ring", "The Hobbit"]
        );
        assert_eq!(
            titles(RecordFilter::new("hob", completed).apply(&records)),
            ["The Hobbit"]
        );
    }

    #[test]
    fn test_all_keyword() {
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "completed".parse::<StatusFilter>(),
            Ok(StatusFilter::Only("completed".into()))
        );
    }
}
