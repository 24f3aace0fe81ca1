//! Server Integration Tests
//!
//! Drive the router directly and verify the static serving and the `/api`
//! proxy end to end. Proxy tests run against a stub backend bound to an
//! ephemeral port that echoes back what it received.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use folio::server::{build_router, AppState};

fn test_app(upstream: &str) -> Router {
    build_router(Arc::new(AppState {
        upstream: upstream.trim_end_matches('/').to_string(),
        http_client: reqwest::Client::new(),
    }))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Stub backend reporting the request it saw
async fn echo(req: Request<Body>) -> Json<Value> {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    let cookie = parts
        .headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let host = parts
        .headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    Json(json!({
        "method": parts.method.as_str(),
        "path": parts.uri.path(),
        "query": parts.uri.query(),
        "cookie": cookie,
        "host": host,
        "body": String::from_utf8_lossy(&bytes),
    }))
}

async fn spawn_stub_backend() -> String {
    let app = Router::new().route("/api/*path", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// =============================================================================
// Static serving
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_is_served() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_spa_routes_fall_back_to_index() {
    let app = test_app("http://127.0.0.1:9");

    // A client-side route has no embedded file but must render the app
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/missing-bundle.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Proxy
// =============================================================================

#[tokio::test]
async fn test_proxy_forwards_path_query_and_cookie() {
    let upstream = spawn_stub_backend().await;
    let app = test_app(&upstream);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/admin/summary?probe=1")
                .header(header::COOKIE, "session=abc123")
                .header(header::HOST, "folio.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let seen = json_response(response).await;

    assert_eq!(seen["path"], "/api/admin/summary");
    assert_eq!(seen["query"], "probe=1");
    // The browser's cookie reaches the backend...
    assert_eq!(seen["cookie"], "session=abc123");
    // ...but the original Host does not; the upstream sees its own
    let host = seen["host"].as_str().unwrap();
    assert_ne!(host, "folio.example");
    assert!(host.starts_with("127.0.0.1"));
}

#[tokio::test]
async fn test_proxy_forwards_method_and_body() {
    let upstream = spawn_stub_backend().await;
    let app = test_app(&upstream);

    let payload = json!({"email": "admin@example.com", "password": "hunter2"});
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let seen = json_response(response).await;

    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["path"], "/api/auth/login");
    let body: Value = serde_json::from_str(seen["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_proxy_unreachable_upstream_is_bad_gateway() {
    // Nothing listens on the discard port
    let app = test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_non_api_paths_are_not_proxied() {
    let upstream = spawn_stub_backend().await;
    let app = test_app(&upstream);

    // /health is answered locally even with a live upstream configured
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}
