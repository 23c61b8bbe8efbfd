use super::endpoint::Endpoint;
use super::query_params::QueryParams;

/// Base path of the statistics API as seen from the browser.
pub const API_BASE: &str = "/api";

/// Name of the query parameter carrying the API credential.
pub const CREDENTIAL_PARAM: &str = "key";

/// One GET request against `{base}/{endpoint}`.
///
/// The credential is appended to the caller's parameters after them, so a
/// caller-supplied `key` is overwritten by the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    base: String,
    endpoint: Endpoint,
    params: QueryParams,
    credential: String,
}

impl ApiRequest {
    pub fn new(
        base: impl Into<String>,
        endpoint: Endpoint,
        params: QueryParams,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            endpoint,
            params,
            credential: credential.into(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// `{base}/{endpoint}` without a query string
    pub fn path(&self) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            self.endpoint.as_str().trim_start_matches('/')
        )
    }

    /// Caller parameters with the credential injected.
    pub fn query(&self) -> QueryParams {
        self.params
            .clone()
            .with(CREDENTIAL_PARAM, &self.credential)
    }

    /// Full URL with a percent-encoded query string.
    pub fn url(&self) -> String {
        format!("{}?{}", self.path(), encode_query(&self.query()))
    }
}

/// `k1=v1&k2=v2` with keys and values percent-encoded.
pub fn encode_query(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_added_to_params() {
        let params = QueryParams::new()
            .with("dateFrom", "2024-01-01")
            .with("dateTo", "2024-01-31");
        let request = ApiRequest::new(API_BASE, Endpoint::ORDERS, params.clone(), "secret");

        let query = request.query();
        assert_eq!(query.get("key"), Some("secret"));
        assert_eq!(query.len(), params.len() + 1);
        for (k, v) in &params {
            assert_eq!(query.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn test_credential_overwrites_caller_key() {
        let params = QueryParams::new().with("key", "from-caller").with("page", 1);
        let request = ApiRequest::new(API_BASE, Endpoint::SALES, params, "secret");

        assert_eq!(request.query().get("key"), Some("secret"));
        assert_eq!(request.query().get("page"), Some("1"));
    }

    #[test]
    fn test_url() {
        let params = QueryParams::new()
            .with("dateFrom", "2024-01-01")
            .with("brand", "Nike & Co");
        let request = ApiRequest::new("/api/", Endpoint::STOCKS, params, "k1");

        assert_eq!(request.path(), "/api/stocks");
        assert_eq!(
            request.url(),
            "/api/stocks?brand=Nike%20%26%20Co&dateFrom=2024-01-01&key=k1"
        );
    }

    #[test]
    fn test_url_with_no_params_still_has_key() {
        let request = ApiRequest::new(
            "http://127.0.0.1:6969/api",
            Endpoint::INCOMES,
            QueryParams::new(),
            "",
        );
        assert_eq!(request.url(), "http://127.0.0.1:6969/api/incomes?key=");
    }
}
