use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Path segment of a remote statistics resource, e.g. `orders`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    pub const INCOMES: Endpoint = Endpoint(Cow::Borrowed("incomes"));
    pub const ORDERS: Endpoint = Endpoint(Cow::Borrowed("orders"));
    pub const SALES: Endpoint = Endpoint(Cow::Borrowed("sales"));
    pub const STOCKS: Endpoint = Endpoint(Cow::Borrowed("stocks"));

    /// `None` for an empty name. Anything else is accepted as is.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return None;
        }
        Some(Self(Cow::Owned(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Endpoints served by the statistics API
    pub fn all() -> Vec<Endpoint> {
        vec![
            Endpoint::INCOMES,
            Endpoint::ORDERS,
            Endpoint::SALES,
            Endpoint::STOCKS,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
