use crate::assets::static_routes;
use crate::routes::{health_routes, info_routes, optimize_routes, status_routes};
use crate::{AppState, Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use promptsmith_config::ServerConfig;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

/// Assemble the full application router
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, config.port).parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(optimize_routes())
        .merge(status_routes())
        .merge(info_routes())
        .with_state(state)
        .merge(health_routes())
        .merge(static_routes(config.web_dir.as_deref()))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(cors)
}

pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    if config.share {
        tracing::warn!(
            "Public share links are not supported; the UI is only reachable on {}",
            config.bind_address()
        );
    }

    let app = build_router(state, config);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
