//! HTTP handlers for the product CRUD surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use productsvc_core::error::CoreError;
use productsvc_core::types::DbId;
use productsvc_db::models::product::{CreateProduct, PageRequest, UpdateProduct};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /products
///
/// Create a new product. Returns 201 with the created row, including its
/// store-assigned id and timestamps.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let created = state.products.create(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products/{id}
///
/// Fetch a single product by id. Soft-deleted products are still reachable
/// here; only the listing filters them.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match state.products.get_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        })),
    }
}

/// GET /products?page=&size=&sort=field,asc|desc
///
/// Page of active products with total-count metadata.
pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> AppResult<impl IntoResponse> {
    let result = state.products.list(&page).await?;
    tracing::debug!(
        total = result.total_elements,
        page = result.number,
        "Listed active products"
    );
    Ok(Json(result))
}

/// PUT /products/{id}
///
/// Partial update: only fields present in the payload overwrite the row.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let updated = state.products.update(id, &patch).await?;
    Ok(Json(updated))
}

/// DELETE /products/{id}
///
/// Soft-delete: flags the row deleted and returns 204 with no body.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
