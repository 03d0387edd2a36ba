//! Route definitions for the product CRUD surface.
//!
//! Mounted at `/products` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes.
///
/// ```text
/// GET    /          -> list_products (?page, size, sort)
/// POST   /          -> create_product
/// GET    /{id}      -> get_product
/// PUT    /{id}      -> update_product
/// DELETE /{id}      -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
