use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::api_proxy::{self, ProxyState};

/// Конфигурация всех роутов приложения
///
/// `/api/:endpoint` goes to the statistics API, everything else is the
/// built frontend with `index.html` as the SPA fallback.
pub fn configure_routes(state: Arc<ProxyState>, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/:endpoint", get(api_proxy::forward))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}
