use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api_request::{encode_query, CREDENTIAL_PARAM};
use contracts::shared::endpoint::Endpoint;
use contracts::shared::query_params::QueryParams;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::shared::config::UpstreamConfig;

/// Ошибки проксирования запроса к API статистики
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid endpoint: {0:?}")]
    InvalidEndpoint(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidEndpoint(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!("Proxy error: {}", self);
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared state of the `/api/:endpoint` route
pub struct ProxyState {
    client: reqwest::Client,
    upstream: UpstreamConfig,
}

impl ProxyState {
    pub fn new(upstream: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(upstream.timeout_secs))
            .build()?;
        Ok(Self { client, upstream })
    }

    /// Full upstream URL for an endpoint and the already-merged query
    pub fn upstream_url(&self, endpoint: &Endpoint, query: &QueryParams) -> String {
        let base = format!(
            "{}/{}",
            self.upstream.base_url.trim_end_matches('/'),
            endpoint.as_str()
        );
        if query.is_empty() {
            base
        } else {
            format!("{}?{}", base, encode_query(query))
        }
    }
}

/// Endpoint names are plain `[A-Za-z0-9_-]` segments; they go into the
/// upstream path as-is, so `?`, `#`, `/` or `%` would change the URL.
pub fn validate_endpoint(name: &str) -> Result<Endpoint, ProxyError> {
    let plain = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !plain {
        return Err(ProxyError::InvalidEndpoint(name.to_string()));
    }
    Endpoint::new(name).ok_or_else(|| ProxyError::InvalidEndpoint(name.to_string()))
}

/// Client parameters with the server-side credential, if one is configured.
/// Without one, a client-sent `key` passes through untouched.
pub fn upstream_query(params: QueryParams, api_key: Option<&str>) -> QueryParams {
    match api_key {
        Some(key) if !key.is_empty() => params.with(CREDENTIAL_PARAM, key),
        _ => params,
    }
}

/// GET /api/:endpoint -> GET {upstream}/{endpoint}, status and body verbatim
pub async fn forward(
    State(state): State<Arc<ProxyState>>,
    Path(endpoint): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Response, ProxyError> {
    let endpoint = validate_endpoint(&endpoint)?;
    let query = upstream_query(params, state.upstream.api_key.as_deref());
    let url = state.upstream_url(&endpoint, &query);

    let upstream = state.client.get(&url).send().await?;
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let bytes = upstream.bytes().await?;

    tracing::info!(
        "Proxied /{} ({} params) -> {}",
        endpoint,
        query.len(),
        status.as_u16()
    );

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use std::collections::BTreeMap;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    fn upstream_config(base_url: String, api_key: Option<&str>) -> UpstreamConfig {
        UpstreamConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            timeout_secs: 5,
        }
    }

    async fn echo(
        Path(endpoint): Path<String>,
        Query(query): Query<BTreeMap<String, String>>,
    ) -> Response {
        if endpoint == "missing" {
            return (StatusCode::NOT_FOUND, Json(serde_json::json!({ "message": "no such" })))
                .into_response();
        }
        Json(serde_json::json!({ "endpoint": endpoint, "query": query })).into_response()
    }

    async fn serve(app: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn proxy_for(upstream: UpstreamConfig) -> SocketAddr {
        let state = Arc::new(ProxyState::new(upstream).unwrap());
        serve(
            Router::new()
                .route("/api/:endpoint", get(forward))
                .with_state(state),
        )
        .await
    }

    #[test]
    fn test_validate_endpoint() {
        assert_eq!(validate_endpoint("orders").unwrap(), Endpoint::ORDERS);
        assert!(validate_endpoint("").is_err());
        assert!(validate_endpoint("..").is_err());
        assert!(validate_endpoint("a/b").is_err());
        assert_eq!(validate_endpoint("report_v2-daily").unwrap().as_str(), "report_v2-daily");
    }

    #[test]
    fn test_validate_endpoint_rejects_url_syntax() {
        for name in ["orders#", "orders?key=x", "orders%3F", "or ders", "заказы", "a\\b"] {
            assert!(
                matches!(validate_endpoint(name), Err(ProxyError::InvalidEndpoint(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_upstream_query() {
        let params = QueryParams::new().with("dateFrom", "2024-01-01").with("key", "client");

        let with_server_key = upstream_query(params.clone(), Some("server"));
        assert_eq!(with_server_key.get("key"), Some("server"));
        assert_eq!(with_server_key.get("dateFrom"), Some("2024-01-01"));

        assert_eq!(upstream_query(params.clone(), None).get("key"), Some("client"));
        assert_eq!(upstream_query(params, Some("")).get("key"), Some("client"));
    }

    #[test]
    fn test_upstream_url() {
        let state =
            ProxyState::new(upstream_config("http://stats.local/api/".to_string(), None)).unwrap();
        let query = QueryParams::new().with("dateFrom", "2024-01-01").with("key", "k");

        assert_eq!(
            state.upstream_url(&Endpoint::SALES, &query),
            "http://stats.local/api/sales?dateFrom=2024-01-01&key=k"
        );
        assert_eq!(
            state.upstream_url(&Endpoint::SALES, &QueryParams::new()),
            "http://stats.local/api/sales"
        );
    }

    #[tokio::test]
    async fn test_forward_injects_server_key() {
        let upstream = serve(Router::new().route("/api/:endpoint", get(echo))).await;
        let proxy = proxy_for(upstream_config(
            format!("http://{}/api", upstream),
            Some("server-key"),
        ))
        .await;

        let response = reqwest::get(format!(
            "http://{}/api/orders?dateFrom=2024-01-01&key=client-key",
            proxy
        ))
        .await
        .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["endpoint"], "orders");
        assert_eq!(body["query"]["dateFrom"], "2024-01-01");
        assert_eq!(body["query"]["key"], "server-key");
    }

    #[tokio::test]
    async fn test_forward_passes_upstream_status_through() {
        let upstream = serve(Router::new().route("/api/:endpoint", get(echo))).await;
        let proxy = proxy_for(upstream_config(format!("http://{}/api", upstream), None)).await;

        let response = reqwest::get(format!("http://{}/api/missing?key=abc", proxy))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "no such");
    }

    #[tokio::test]
    async fn test_encoded_query_chars_in_endpoint_are_rejected() {
        let upstream = serve(Router::new().route("/api/:endpoint", get(echo))).await;
        let proxy = proxy_for(upstream_config(
            format!("http://{}/api", upstream),
            Some("server-key"),
        ))
        .await;

        for path in ["orders%23", "orders%3Fkey%3Dclient"] {
            let response = reqwest::get(format!(
                "http://{}/api/{}?dateFrom=2024-01-01",
                proxy, path
            ))
            .await
            .unwrap();
            assert_eq!(response.status().as_u16(), 400, "{path}");

            let body: serde_json::Value = response.json().await.unwrap();
            assert!(body["error"].as_str().unwrap().starts_with("Invalid endpoint"));
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        // Bind and release a port so nothing listens on it
        let closed = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let proxy = proxy_for(upstream_config(format!("http://{}/api", closed), None)).await;

        let response = reqwest::get(format!("http://{}/api/orders", proxy))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 502);

        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Upstream request failed"));
    }
}
