//! Utilities for date formatting in filter summaries

use chrono::NaiveDate;
use contracts::shared::filters::DATE_FORMAT;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Human-readable range, e.g. "01.01.2024 — 31.01.2024"
pub fn format_range(date_from: &str, date_to: &str) -> String {
    match (date_from.is_empty(), date_to.is_empty()) {
        (true, true) => "период не выбран".to_string(),
        (false, true) => format!("с {}", format_date(date_from)),
        (true, false) => format!("по {}", format_date(date_to)),
        (false, false) => format!("{} — {}", format_date(date_from), format_date(date_to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(
            format_range("2024-01-01", "2024-01-31"),
            "01.01.2024 — 31.01.2024"
        );
        assert_eq!(format_range("2024-01-01", ""), "с 01.01.2024");
        assert_eq!(format_range("", ""), "период не выбран");
    }
}
