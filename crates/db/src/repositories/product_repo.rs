//! Repository for the `products` table.

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use productsvc_core::types::DbId;

use crate::models::product::{PageRequest, Product};

const COLUMNS: &str = "id, name, price, description, deleted, created_at, updated_at";

/// Raw SQL operations for product rows. Business rules live in the service
/// layer; everything here is a straight query.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new active product, returning the created row with its
    /// store-assigned id and timestamps.
    pub async fn insert(
        pool: &PgPool,
        name: &str,
        price: Decimal,
        description: Option<&str>,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, price, description, deleted) \
             VALUES ($1, $2, $3, FALSE) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .bind(price)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Find a product by id. Deliberately does not filter on `deleted`:
    /// direct lookups still see soft-deleted rows, only the active listing
    /// hides them.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by id inside a transaction, taking a row lock so a
    /// read-then-write sequence cannot race a concurrent writer.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Apply a partial update in one atomic statement. Only non-NULL binds
    /// overwrite their column; `updated_at` is always refreshed. Returns
    /// `None` when no row matches the id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        price: Option<Decimal>,
        description: Option<&str>,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                name = COALESCE($2, name), \
                price = COALESCE($3, price), \
                description = COALESCE($4, description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(name)
            .bind(price)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Flip the soft-delete flag on a row. Callers hold the row lock from
    /// [`Self::find_by_id_for_update`].
    pub async fn mark_deleted(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE products SET deleted = TRUE, updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// One page of active products plus the total active count.
    pub async fn list_active(
        pool: &PgPool,
        page: &PageRequest,
    ) -> Result<(Vec<Product>, i64), sqlx::Error> {
        let order = page.order_clause();
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE deleted = FALSE \
             ORDER BY {order} \
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Product>(&query)
            .bind(page.size())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE deleted = FALSE")
            .fetch_one(pool)
            .await?;

        Ok((rows, total))
    }
}
