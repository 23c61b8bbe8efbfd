use crate::enums::compare_period::ComparePeriod;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Start of the range restored by a reset.
pub const BASELINE_DATE_FROM: &str = "2024-01-01";

/// Date format used for every date-valued filter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire names of the typed [`FilterSet`] fields. These never land in `extra`.
pub const WIRE_NAMES: [&str; 9] = [
    "selectedDate",
    "nm_id",
    "nmId",
    "oblast",
    "category",
    "brand",
    "dateFrom",
    "dateTo",
    "comparePeriod",
];

/// Text form of a JSON scalar as it is stored in the filters: strings as is,
/// `null` as empty, everything else in its JSON spelling.
pub fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Current query filters shared by every dashboard page.
///
/// Field names on the wire are the camelCase names the statistics API and
/// the pages use. `nm_id` and `nm_id_compat` (`nmId`) are two independent
/// product id slots; nothing keeps them in sync.
///
/// Deserialization is lenient: missing keys keep their defaults and any JSON
/// scalar is accepted as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BTreeMap<String, Value>")]
pub struct FilterSet {
    pub selected_date: String,
    #[serde(rename = "nm_id")]
    pub nm_id: String,
    #[serde(rename = "nmId")]
    pub nm_id_compat: String,
    pub oblast: String,
    pub category: String,
    pub brand: String,
    pub date_from: String,
    pub date_to: String,
    pub compare_period: ComparePeriod,
    /// Keys outside the named fields, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            selected_date: String::new(),
            nm_id: String::new(),
            nm_id_compat: String::new(),
            oblast: String::new(),
            category: String::new(),
            brand: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            compare_period: ComparePeriod::Day,
            extra: BTreeMap::new(),
        }
    }
}

impl FilterSet {
    /// Shallow merge: every field present in `patch` overwrites the current
    /// value, absent fields are left alone.
    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch {
            selected_date,
            nm_id,
            nm_id_compat,
            oblast,
            category,
            brand,
            date_from,
            date_to,
            compare_period,
            extra,
        } = patch;

        if let Some(v) = selected_date {
            self.selected_date = v;
        }
        if let Some(v) = nm_id {
            self.nm_id = v;
        }
        if let Some(v) = nm_id_compat {
            self.nm_id_compat = v;
        }
        if let Some(v) = oblast {
            self.oblast = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = brand {
            self.brand = v;
        }
        if let Some(v) = date_from {
            self.date_from = v;
        }
        if let Some(v) = date_to {
            self.date_to = v;
        }
        if let Some(v) = compare_period {
            self.compare_period = v;
        }
        for (key, value) in extra {
            self.set_field(&key, value);
        }
    }

    /// Set one filter by its wire name. Unknown names go to `extra`.
    pub fn set_field(&mut self, key: &str, value: String) {
        match key {
            "selectedDate" => self.selected_date = value,
            "nm_id" => self.nm_id = value,
            "nmId" => self.nm_id_compat = value,
            "oblast" => self.oblast = value,
            "category" => self.category = value,
            "brand" => self.brand = value,
            "dateFrom" => self.date_from = value,
            "dateTo" => self.date_to = value,
            "comparePeriod" => self.compare_period = ComparePeriod::from(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Baseline state for a given "today".
    pub fn baseline(today: NaiveDate) -> Self {
        Self {
            date_from: BASELINE_DATE_FROM.to_string(),
            date_to: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Replace the whole set with the baseline for `today`.
    pub fn reset_at(&mut self, today: NaiveDate) {
        *self = Self::baseline(today);
    }

    /// Replace the whole set with the baseline; `date_to` is the current UTC
    /// date at the moment of the call.
    pub fn reset(&mut self) {
        self.reset_at(today());
    }
}

impl From<BTreeMap<String, Value>> for FilterSet {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut filters = FilterSet::default();
        for (key, value) in raw {
            filters.set_field(&key, scalar_text(value));
        }
        filters
    }
}

/// Current UTC date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Partial update for [`FilterSet`]. `None` means "keep the current value".
///
/// Deserializes from any JSON object of scalars; known wire names fill the
/// typed fields, the rest goes to `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BTreeMap<String, Value>")]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<String>,
    #[serde(rename = "nm_id", skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<String>,
    #[serde(rename = "nmId", skip_serializing_if = "Option::is_none")]
    pub nm_id_compat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oblast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_period: Option<ComparePeriod>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(mut self, value: impl Into<String>) -> Self {
        self.selected_date = Some(value.into());
        self
    }

    pub fn nm_id(mut self, value: impl Into<String>) -> Self {
        self.nm_id = Some(value.into());
        self
    }

    pub fn nm_id_compat(mut self, value: impl Into<String>) -> Self {
        self.nm_id_compat = Some(value.into());
        self
    }

    pub fn oblast(mut self, value: impl Into<String>) -> Self {
        self.oblast = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn brand(mut self, value: impl Into<String>) -> Self {
        self.brand = Some(value.into());
        self
    }

    pub fn date_from(mut self, value: impl Into<String>) -> Self {
        self.date_from = Some(value.into());
        self
    }

    pub fn date_to(mut self, value: impl Into<String>) -> Self {
        self.date_to = Some(value.into());
        self
    }

    pub fn date_range(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.date_from(from).date_to(to)
    }

    pub fn compare_period(mut self, value: impl Into<ComparePeriod>) -> Self {
        self.compare_period = Some(value.into());
        self
    }

    /// Any key by wire name; a known name sets the typed field instead.
    pub fn extra(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "selectedDate" => self.selected_date(value),
            "nm_id" => self.nm_id(value),
            "nmId" => self.nm_id_compat(value),
            "oblast" => self.oblast(value),
            "category" => self.category(value),
            "brand" => self.brand(value),
            "dateFrom" => self.date_from(value),
            "dateTo" => self.date_to(value),
            "comparePeriod" => self.compare_period(value),
            _ => {
                let mut patch = self;
                patch.extra.insert(key, value);
                patch
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<BTreeMap<String, Value>> for FilterPatch {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        raw.into_iter().fold(FilterPatch::new(), |patch, (key, value)| {
            patch.extra(key, scalar_text(value))
        })
    }
}
