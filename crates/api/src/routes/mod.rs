pub mod health;
pub mod products;

use axum::Router;

use crate::middleware::api_key;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route behind this nest requires the `X-API-KEY` header when a key
/// is configured. `/health` is mounted at the root, outside the gate.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            api_key::require_api_key,
        ))
}
