//! Offline input files for `check` and `summarize`.

use mediashelf::{Record, RecordDraft};
use serde_json::Value;
use std::path::Path;

use crate::api::records_from_value;
use crate::error::CliResult;

/// Read records from a JSON file holding an array or `{ "items": [...] }`.
pub async fn load_records(path: &Path) -> CliResult<Vec<Record>> {
    let content = tokio::fs::read_to_string(path).await?;
    let data: Value = serde_json::from_str(&content)?;
    Ok(records_from_value(data)?)
}

/// Read candidate records from a JSON array.
pub async fn load_drafts(path: &Path) -> CliResult<Vec<RecordDraft>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_wrapped_records() {
        let file = file_with(r#"{ "items": [ { "id": "x1", "title": "Ran", "status": "Planned" } ] }"#);
        let records = load_records(file.path()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Ran");
    }

    #[tokio::test]
    async fn test_load_drafts_keeps_fractions() {
        let file = file_with(r#"[ { "title": "Ran", "type": "Movie", "year": 1985.5, "rating": null } ]"#);
        let drafts = load_drafts(file.path()).await.unwrap();
        assert_eq!(drafts[0].year, Some(1985.5));
        assert_eq!(drafts[0].rating, None);
        assert_eq!(drafts[0].kind, "Movie");
    }

    #[tokio::test]
    async fn test_missing_file_and_bad_json() {
        let missing = load_records(Path::new("/nonexistent/mediashelf.json")).await;
        assert!(matches!(missing, Err(CliError::Io(_))));

        let file = file_with("not json");
        assert!(matches!(load_records(file.path()).await, Err(CliError::Json(_))));
    }
}
