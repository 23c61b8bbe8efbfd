pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Простой middleware для логирования запросов
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();
        // Query strings may carry the api key, so only the path is logged
        tracing::info!(
            "{} | {:>5}ms | {:>8} | {} {}",
            response.status().as_u16(),
            start.elapsed().as_millis(),
            size,
            method,
            path
        );
        response
    }

    let config = shared::config::load_config()?;
    tracing::info!(
        "Upstream: {} (server-side key: {})",
        config.upstream.base_url,
        if config.upstream.api_key.is_some() { "yes" } else { "no" }
    );

    let state = Arc::new(handlers::api_proxy::ProxyState::new(config.upstream.clone())?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state, &config.server.static_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
