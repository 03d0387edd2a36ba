use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use productsvc_api::config::ServerConfig;
use productsvc_api::middleware::error_path;
use productsvc_api::routes;
use productsvc_api::service::ProductService;
use productsvc_api::state::AppState;
use productsvc_db::store::PgProductStore;

/// Shared secret used by gated test apps.
pub const TEST_API_KEY: &str = "test-secret-key";

/// Build a test `ServerConfig` with safe defaults and the given API key.
pub fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_key: api_key.map(str::to_string),
    }
}

/// Build the application router the way `main.rs` does, minus the network
/// listener, so integration tests exercise the same route tree, API-key
/// gate, and error-path middleware that production uses.
pub fn build_test_app(pool: PgPool, api_key: Option<&str>) -> Router {
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(test_config(api_key)),
        products: ProductService::new(PgProductStore::new(pool)),
    };

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes(&state))
        .layer(axum::middleware::from_fn(error_path::attach_error_path))
        .with_state(state)
}

/// Send a request carrying the test API key.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", TEST_API_KEY);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
