use serde::{Deserialize, Serialize};
use std::fmt;

/// Гранулярность сравнения периодов
///
/// На проводе это обычная строка; значения кроме известных сохраняются
/// как есть в `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComparePeriod {
    #[default]
    Day,
    Week,
    Month,
    Custom(String),
}

impl ComparePeriod {
    /// Строковый код периода
    pub fn code(&self) -> &str {
        match self {
            ComparePeriod::Day => "day",
            ComparePeriod::Week => "week",
            ComparePeriod::Month => "month",
            ComparePeriod::Custom(value) => value,
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &str {
        match self {
            ComparePeriod::Day => "День",
            ComparePeriod::Week => "Неделя",
            ComparePeriod::Month => "Месяц",
            ComparePeriod::Custom(value) => value,
        }
    }

    /// Известные периоды, в порядке отображения
    pub fn all() -> Vec<ComparePeriod> {
        vec![ComparePeriod::Day, ComparePeriod::Week, ComparePeriod::Month]
    }

    /// Парсинг из строки, никогда не падает
    pub fn from_code(code: &str) -> Self {
        match code {
            "day" => ComparePeriod::Day,
            "week" => ComparePeriod::Week,
            "month" => ComparePeriod::Month,
            other => ComparePeriod::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ComparePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for ComparePeriod {
    fn from(value: String) -> Self {
        ComparePeriod::from_code(&value)
    }
}

impl From<&str> for ComparePeriod {
    fn from(value: &str) -> Self {
        ComparePeriod::from_code(value)
    }
}

impl From<ComparePeriod> for String {
    fn from(value: ComparePeriod) -> Self {
        match value {
            ComparePeriod::Custom(value) => value,
            known => known.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ComparePeriod::from_code("day"), ComparePeriod::Day);
        assert_eq!(ComparePeriod::from_code("month"), ComparePeriod::Month);
        assert_eq!(ComparePeriod::default().code(), "day");
    }

    #[test]
    fn test_custom_value_is_kept() {
        let period = ComparePeriod::from_code("quarter");
        assert_eq!(period, ComparePeriod::Custom("quarter".to_string()));
        assert_eq!(period.to_string(), "quarter");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ComparePeriod::Week).unwrap();
        assert_eq!(json, "\"week\"");

        let parsed: ComparePeriod = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(parsed, ComparePeriod::Custom("year".to_string()));
    }
}
