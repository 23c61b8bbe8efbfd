//! Helpers for reading the opaque JSON payloads of the statistics API.
//!
//! List endpoints answer either with a bare array or with an object whose
//! `data` field holds the array; both shapes are accepted.

use serde_json::{Map, Value};

pub type Row = Map<String, Value>;

/// Rows of a list payload. Non-object entries are skipped.
pub fn extract_rows(payload: &Value) -> Vec<Row> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .iter()
        .filter_map(|item| item.as_object().cloned())
        .collect()
}

/// Column names taken from the first row, at most `limit` of them
pub fn columns(rows: &[Row], limit: usize) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().take(limit).cloned().collect())
        .unwrap_or_default()
}

/// Display text for one cell
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => (if *b { "да" } else { "нет" }).to_string(),
        Some(other) => other.to_string(),
    }
}

/// Rows whose `key` equals `expected`, comparing numbers and strings by
/// their text form. An empty `expected` keeps every row.
pub fn filter_rows(rows: Vec<Row>, key: &str, expected: &str) -> Vec<Row> {
    if expected.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| cell_text(row.get(key)) == expected)
        .collect()
}

/// Sum of a numeric field; strings holding numbers count too.
pub fn sum_field(rows: &[Row], key: &str) -> f64 {
    rows.iter()
        .filter_map(|row| match row.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.parse::<f64>().ok(),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_rows_from_both_shapes() {
        let bare = json!([{"nm_id": 1}, {"nm_id": 2}, 3]);
        assert_eq!(extract_rows(&bare).len(), 2);

        let wrapped = json!({"data": [{"nm_id": 1}], "meta": {"total": 1}});
        assert_eq!(extract_rows(&wrapped).len(), 1);

        assert!(extract_rows(&json!({"error": "bad key"})).is_empty());
        assert!(extract_rows(&Value::Null).is_empty());
    }

    #[test]
    fn test_filter_rows_by_number_or_string() {
        let rows = extract_rows(&json!([
            {"nm_id": 101, "total_price": 10.5},
            {"nm_id": "102", "total_price": "4.5"},
            {"nm_id": 101, "total_price": 1}
        ]));

        assert_eq!(filter_rows(rows.clone(), "nm_id", "101").len(), 2);
        assert_eq!(filter_rows(rows.clone(), "nm_id", "102").len(), 1);
        assert_eq!(filter_rows(rows.clone(), "nm_id", "").len(), 3);
        assert!((sum_field(&rows, "total_price") - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&json!("Москва"))), "Москва");
        assert_eq!(cell_text(Some(&json!(42))), "42");
        assert_eq!(cell_text(Some(&json!(true))), "да");
    }
}
