use super::filters::{FilterSet, WIRE_NAMES};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Query parameters for one API request, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter; an existing value under the same key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Builder form of [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Non-empty filter values under their wire names, plus any extra keys.
    /// `comparePeriod` is always present. Typed fields win over an `extra`
    /// entry with the same name.
    pub fn from_filters(filters: &FilterSet) -> Self {
        let mut params = Self::new();
        let named = [
            ("selectedDate", &filters.selected_date),
            ("nm_id", &filters.nm_id),
            ("nmId", &filters.nm_id_compat),
            ("oblast", &filters.oblast),
            ("category", &filters.category),
            ("brand", &filters.brand),
            ("dateFrom", &filters.date_from),
            ("dateTo", &filters.date_to),
        ];
        for (key, value) in named {
            if !value.is_empty() {
                params.insert(key, value);
            }
        }
        params.insert("comparePeriod", &filters.compare_period);
        for (key, value) in &filters.extra {
            if !WIRE_NAMES.contains(&key.as_str()) {
                params.insert(key.clone(), value);
            }
        }
        params
    }

    /// Paging parameters understood by the statistics endpoints.
    pub fn paged(self, page: u32, limit: u32) -> Self {
        self.with("page", page).with("limit", limit)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
