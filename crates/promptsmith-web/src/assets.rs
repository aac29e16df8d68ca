//! Static asset serving
//!
//! - Default: assets embedded via rust-embed
//! - `--web-dir` / `server.web_dir` serves from the filesystem instead

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get_service,
    Router,
};
use rust_embed::Embed;
use tower_http::services::ServeDir;

/// Embedded page assets
#[derive(Embed)]
#[folder = "web"]
struct Assets;

/// Create router for serving static assets
pub fn static_routes(web_dir: Option<&str>) -> Router {
    if let Some(dir) = web_dir {
        tracing::info!("Serving static assets from: {}", dir);
        serve_from_dir(dir)
    } else {
        tracing::debug!("Serving embedded static assets");
        serve_embedded()
    }
}

fn serve_from_dir(dir: &str) -> Router {
    Router::new().fallback_service(
        get_service(ServeDir::new(dir).append_index_html_on_directories(true))
            .handle_error(|_| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
}

fn serve_embedded() -> Router {
    Router::new().fallback(embedded_handler)
}

async fn embedded_handler(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match <Assets as Embed>::get(path) {
        Some(content) => respond_with_asset(path, content.data.into_owned()),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn respond_with_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], data).into_response()
}
