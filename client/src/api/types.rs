//! Response payload shapes.
//!
//! Record list endpoints differ between backends: some return a bare array,
//! others wrap it as `{ "items": [...] }`. Both are accepted here.

use mediashelf::Record;
use serde_json::Value;

/// Decode a record list from either payload shape.
///
/// Any other shape (an object without `items`, a string, `null`) is an
/// empty list; records inside a recognised shape must decode.
pub fn records_from_value(data: Value) -> Result<Vec<Record>, serde_json::Error> {
    match data {
        Value::Array(_) => serde_json::from_value(data),
        Value::Object(mut map) => match map.remove("items") {
            Some(items @ Value::Array(_)) => serde_json::from_value(items),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Message to show for a failed request.
pub fn error_message(data: &Value, status: u16) -> String {
    data.get("error")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("Request failed ({})", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let records = records_from_value(json!([
            { "id": 1, "title": "Up", "type": "Movie", "genre": "Family", "year": 2009, "status": "Completed" }
        ]))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, "Movie");
    }

    #[test]
    fn test_wrapped_items() {
        let records = records_from_value(json!({
            "items": [{ "title": "Up" }, { "title": "Coco" }],
            "count": 2
        }))
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Coco");
    }

    #[test]
    fn test_other_shapes_are_empty() {
        assert!(records_from_value(json!({ "ok": true })).unwrap().is_empty());
        assert!(records_from_value(json!({ "items": "none" })).unwrap().is_empty());
        assert!(records_from_value(Value::Null).unwrap().is_empty());
        assert!(records_from_value(json!("<html>")).unwrap().is_empty());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(&json!({ "error": "Title taken" }), 400), "Title taken");
        assert_eq!(error_message(&json!({ "detail": "x" }), 404), "Request failed (404)");
        assert_eq!(error_message(&json!("oops"), 500), "Request failed (500)");
    }
}
