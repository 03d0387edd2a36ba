//! Static shared-secret gate for the `/api/v1` surface.
//!
//! Every request behind the gate must carry an `X-API-KEY` header matching
//! the configured secret. `/health` is mounted outside the gated nest and
//! stays open. The service layer assumes this gate has already run and never
//! re-checks it.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use productsvc_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject requests whose `X-API-KEY` header does not match the configured
/// secret. The gate is disabled when no secret is configured.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.api_key.as_deref() {
        let presented = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if presented != Some(expected) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Missing or invalid API key".into(),
            )));
        }
    }

    Ok(next.run(request).await)
}
