//! Web Server for the Folio UI
//!
//! Serves the embedded web bundle and proxies `/api` requests to the
//! deployed backend. Request headers (minus `Host`) pass through the proxy,
//! so the browser's `Cookie` header reaches the backend and admin sessions
//! survive the hop.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServeConfig;

/// Embedded UI assets (compiled WASM bundle)
#[derive(RustEmbed)]
#[folder = "../ui/dist/"]
struct UiAssets;

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Backend origin `/api` requests are replayed against
    pub upstream: String,
    pub http_client: reqwest::Client,
}

/// Build the router; separate from [`start_server`] so tests can drive it
/// directly
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness of this host process; the backend's own /health is the
        // probes' business
        .route("/health", get(health_check))
        // Everything under /api goes to the backend
        .route("/api", any(proxy_api))
        .route("/api/*path", any(proxy_api))
        // Serve UI assets - index.html for root
        .route("/", get(serve_index))
        // Use fallback for all other paths (static files and SPA routing)
        .fallback(serve_static)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn start_server(
    config: &ServeConfig,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let state = Arc::new(AppState {
        upstream: config.upstream.clone(),
        http_client: reqwest::Client::new(),
    });

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("UI server listening on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(handle)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Forward an `/api` request to the backend
async fn proxy_api(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
) -> impl IntoResponse {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let url = format!("{}{}", state.upstream, path_and_query);
    proxy_request(&state.http_client, &url, req).await
}

/// Generic request proxy
async fn proxy_request(
    client: &reqwest::Client,
    url: &str,
    req: Request<Body>,
) -> impl IntoResponse {
    let method = req.method().clone();
    let headers = req.headers().clone();

    // Read the body
    let body_bytes = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read request body: {}", e),
            )
                .into_response();
        }
    };

    // Build the proxied request; Host must name the upstream, everything
    // else (Cookie included) passes through
    let mut proxy_req = client.request(method, url);
    for (name, value) in headers.iter() {
        if name != header::HOST {
            proxy_req = proxy_req.header(name, value);
        }
    }
    proxy_req = proxy_req.body(body_bytes);

    // Execute the request
    match proxy_req.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let headers = response.headers().clone();
            let body = response.bytes().await.unwrap_or_default();

            let mut res = Response::builder().status(status);
            for (name, value) in headers.iter() {
                if name != header::TRANSFER_ENCODING {
                    res = res.header(name, value);
                }
            }
            res.body(Body::from(body)).unwrap().into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Failed to reach backend: {}", e),
        )
            .into_response(),
    }
}

/// Serve index.html
async fn serve_index() -> impl IntoResponse {
    serve_file("index.html")
}

/// Serve static files from embedded assets (fallback handler)
async fn serve_static(req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path().to_string();
    tracing::debug!("Fallback handler called for path: {}", path);

    // Try the exact path first
    if let Some(response) = try_serve_file(&path) {
        return response;
    }

    // For SPA routing, serve index.html for non-asset paths
    if !path.contains('.') {
        return serve_file("index.html");
    }

    // 404 for missing assets
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn try_serve_file(path: &str) -> Option<Response<Body>> {
    let path = path.trim_start_matches('/');
    UiAssets::get(path).map(|content| {
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime)
            .header(header::CACHE_CONTROL, "public, max-age=3600")
            .body(Body::from(content.data.to_vec()))
            .unwrap()
    })
}

fn serve_file(path: &str) -> Response<Body> {
    match UiAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime)
                .body(Body::from(content.data.to_vec()))
                .unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap(),
    }
}
