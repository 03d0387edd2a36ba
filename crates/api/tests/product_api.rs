//! HTTP-level integration tests for the `/api/v1/products` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Rows are seeded through the HTTP API itself, then verified end to end.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json, TEST_API_KEY};
use sqlx::PgPool;

fn app(pool: PgPool) -> axum::Router {
    build_test_app(pool, Some(TEST_API_KEY))
}

async fn seed_product(app: axum::Router, body: &str) -> i64 {
    let response = post_json(app, "/api/v1/products", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_product(pool: PgPool) {
    let app = app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        r#"{"name": "Mouse", "price": 49.90, "description": "Gamer"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Mouse");
    assert_eq!(json["description"], "Gamer");
    assert_eq!(json["deleted"], false);
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_blank_name(pool: PgPool) {
    let app = app(pool);

    let response = post_json(app, "/api/v1/products", r#"{"name": "  ", "price": 10}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["path"], "/api/v1/products");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_missing_and_nonpositive_price(pool: PgPool) {
    let missing = post_json(app(pool.clone()), "/api/v1/products", r#"{"name": "Mouse"}"#).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let zero = post_json(
        app(pool.clone()),
        "/api/v1/products",
        r#"{"name": "Mouse", "price": 0}"#,
    )
    .await;
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);

    let negative = post_json(
        app(pool),
        "/api/v1/products",
        r#"{"name": "Mouse", "price": -5.00}"#,
    )
    .await;
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trims_name(pool: PgPool) {
    let response = post_json(
        app(pool),
        "/api/v1/products",
        r#"{"name": "  Laptop  ", "price": 1299.99}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Laptop");
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_product_by_id(pool: PgPool) {
    let id = seed_product(
        app(pool.clone()),
        r#"{"name": "Monitor", "price": 899.00}"#,
    )
    .await;

    let response = get(app(pool), &format!("/api/v1/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Monitor");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_product_is_404(pool: PgPool) {
    let response = get(app(pool), "/api/v1/products/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["path"], "/api/v1/products/999");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonpositive_id_is_400(pool: PgPool) {
    let response = get(app(pool), "/api/v1/products/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_returns_page_metadata(pool: PgPool) {
    for i in 0..3 {
        seed_product(
            app(pool.clone()),
            &format!(r#"{{"name": "Item {i}", "price": 10.00}}"#),
        )
        .await;
    }

    let response = get(app(pool), "/api/v1/products?page=0&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 2);
    assert_eq!(json["totalElements"], 3);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["number"], 0);
    assert_eq!(json["size"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_supports_sort_spec(pool: PgPool) {
    seed_product(app(pool.clone()), r#"{"name": "Cheap", "price": 1.00}"#).await;
    seed_product(app(pool.clone()), r#"{"name": "Pricey", "price": 999.00}"#).await;

    let response = get(app(pool), "/api/v1/products?sort=price,desc").await;
    let json = body_json(response).await;
    assert_eq!(json["content"][0]["name"], "Pricey");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_merges_partial_payload(pool: PgPool) {
    let id = seed_product(
        app(pool.clone()),
        r#"{"name": "Viejo", "price": 20.00, "description": "Original"}"#,
    )
    .await;

    let response = put_json(
        app(pool),
        &format!("/api/v1/products/{id}"),
        r#"{"name": "Nuevo", "price": 10.00}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Nuevo");
    assert_eq!(json["price"], 10.00);
    // Omitted fields survive the merge.
    assert_eq!(json["description"], "Original");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_product_is_404(pool: PgPool) {
    let response = put_json(app(pool), "/api/v1/products/999", r#"{"name": "Ghost"}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_product_with_invalid_patch_is_still_404(pool: PgPool) {
    // Existence is checked before the patch fields.
    let response = put_json(app(pool), "/api/v1/products/999", r#"{"name": "   "}"#).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_invalid_fields(pool: PgPool) {
    let id = seed_product(app(pool.clone()), r#"{"name": "Desk", "price": 200.00}"#).await;

    let blank_name = put_json(
        app(pool.clone()),
        &format!("/api/v1/products/{id}"),
        r#"{"name": "   "}"#,
    )
    .await;
    assert_eq!(blank_name.status(), StatusCode::BAD_REQUEST);

    let bad_price = put_json(
        app(pool),
        &format!("/api/v1/products/{id}"),
        r#"{"price": -1}"#,
    )
    .await;
    assert_eq!(bad_price.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_then_listing_excludes_and_second_delete_fails(pool: PgPool) {
    let id = seed_product(app(pool.clone()), r#"{"name": "Headset", "price": 75.00}"#).await;

    let response = delete(app(pool.clone()), &format!("/api/v1/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listing = body_json(get(app(pool.clone()), "/api/v1/products").await).await;
    assert_eq!(listing["totalElements"], 0);

    let again = delete(app(pool), &format!("/api/v1/products/{id}")).await;
    assert_eq!(again.status(), StatusCode::BAD_REQUEST);
    let json = body_json(again).await;
    assert!(
        json["error"].as_str().unwrap().contains("already deleted"),
        "second delete should signal the redundant attempt"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_product_is_404(pool: PgPool) {
    let response = delete(app(pool), "/api/v1/products/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_soft_deleted_product_still_fetchable_by_id(pool: PgPool) {
    // Current behaviour: only the listing filters soft-deleted rows; a
    // direct id lookup still returns them. Pinned deliberately.
    let id = seed_product(app(pool.clone()), r#"{"name": "Phantom", "price": 5.00}"#).await;
    delete(app(pool.clone()), &format!("/api/v1/products/{id}")).await;

    let response = get(app(pool), &format!("/api/v1/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["deleted"], true);
}
