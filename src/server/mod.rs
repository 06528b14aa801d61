//! Preview server exposing the generated feeds over HTTP
//!
//! Every handler re-reads the content tree from disk; there is no cache
//! layer and no shared mutable state, so concurrent requests are safe by
//! construction.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{feed, sitemap, Site};

const CACHE_ONE_HOUR: &str = "public, max-age=3600";
const CACHE_ONE_DAY: &str = "public, max-age=86400";

/// Start the server
pub async fn start(site: Site, ip: &str, port: u16) -> Result<()> {
    let public_dir = site.public_dir.clone();
    let state = Arc::new(site);

    let app = Router::new()
        .route("/rss.xml", get(rss_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/sitemap-images.xml", get(image_sitemap_handler))
        .route("/sitemap.json", get(sitemap_json_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn rss_handler(State(site): State<Arc<Site>>) -> Response {
    let content = site.load_all();
    let body = feed::render_rss(&site.config, &content.posts);
    xml_response(body, CACHE_ONE_HOUR)
}

async fn sitemap_handler(State(site): State<Arc<Site>>) -> Response {
    let content = site.load_all();
    let entries = sitemap::build_entries(&site.config, &content, chrono::Utc::now());
    xml_response(sitemap::render_sitemap(&entries), CACHE_ONE_HOUR)
}

async fn image_sitemap_handler(State(site): State<Arc<Site>>) -> Response {
    let content = site.load_all();
    let body = sitemap::render_image_sitemap(&site.config, &content);
    xml_response(body, CACHE_ONE_DAY)
}

/// Structured sitemap object for the hosting framework's own renderer
async fn sitemap_json_handler(State(site): State<Arc<Site>>) -> Response {
    let content = site.load_all();
    let entries = sitemap::build_entries(&site.config, &content, chrono::Utc::now());

    match serde_json::to_string(&entries) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, CACHE_ONE_HOUR),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize sitemap entries: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

fn xml_response(body: String, cache_control: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response()
}
