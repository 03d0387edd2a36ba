//! Adds the request path to JSON error bodies.
//!
//! Error responses built from [`AppError`](crate::error::AppError) carry a
//! marker extension; this middleware rewrites those bodies to include a
//! `path` field so clients and logs can tell which route failed. Responses
//! without the marker pass through untouched.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ErrorResponseMarker;

/// Upper bound on buffered error bodies. Error payloads are small JSON
/// objects; anything larger passes through with an emptied body rather than
/// unbounded buffering.
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

pub async fn attach_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    if response.extensions().get::<ErrorResponseMarker>().is_none() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    // The body length changes; let hyper recompute it.
    parts.headers.remove(CONTENT_LENGTH);

    let bytes = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(mut value) => {
            if let Some(object) = value.as_object_mut() {
                object.insert("path".into(), serde_json::Value::String(path));
            }
            Response::from_parts(parts, Body::from(value.to_string()))
        }
        Err(_) => Response::from_parts(parts, Body::from(bytes)),
    }
}
