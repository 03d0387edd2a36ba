//! Store abstraction over product persistence.
//!
//! The service layer holds a [`ProductStore`] rather than a pool, so its
//! decision logic (validation ordering, merge semantics, the soft-delete
//! guard) can be exercised against an in-memory implementation in unit
//! tests. [`PgProductStore`] is the production implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;

use productsvc_core::types::DbId;

use crate::models::product::{PageRequest, Product, ProductPage};
use crate::repositories::ProductRepo;
use crate::DbPool;

/// Outcome of a soft-delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row existed, was active, and is now flagged deleted.
    Deleted,
    /// The row exists but was already flagged deleted.
    AlreadyDeleted,
    /// No row with that id.
    NotFound,
}

/// Normalized field changes produced by the service after validation.
/// `None` means "leave the stored value untouched".
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new active product; id and timestamps are store-assigned.
    async fn insert(
        &self,
        name: &str,
        price: Decimal,
        description: Option<&str>,
    ) -> Result<Product, sqlx::Error>;

    /// Direct id lookup. Does not filter soft-deleted rows.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    /// Atomically merge the given changes into the row and refresh
    /// `updated_at`. Returns `None` when no row matches.
    async fn apply_changes(
        &self,
        id: DbId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, sqlx::Error>;

    /// Soft-delete a row. The read-check-write sequence must be atomic with
    /// respect to concurrent deletes, so two callers cannot both observe an
    /// active row.
    async fn soft_delete(&self, id: DbId) -> Result<DeleteOutcome, sqlx::Error>;

    /// One page of active products with total-count metadata.
    async fn list_active(&self, page: &PageRequest) -> Result<ProductPage, sqlx::Error>;
}

/// Postgres-backed [`ProductStore`].
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(
        &self,
        name: &str,
        price: Decimal,
        description: Option<&str>,
    ) -> Result<Product, sqlx::Error> {
        ProductRepo::insert(&self.pool, name, price, description).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::find_by_id(&self.pool, id).await
    }

    async fn apply_changes(
        &self,
        id: DbId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, sqlx::Error> {
        ProductRepo::update(
            &self.pool,
            id,
            changes.name.as_deref(),
            changes.price,
            changes.description.as_deref(),
        )
        .await
    }

    async fn soft_delete(&self, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let outcome = match ProductRepo::find_by_id_for_update(&mut tx, id).await? {
            None => DeleteOutcome::NotFound,
            Some(product) if product.deleted => DeleteOutcome::AlreadyDeleted,
            Some(product) => {
                ProductRepo::mark_deleted(&mut tx, product.id).await?;
                DeleteOutcome::Deleted
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }

    async fn list_active(&self, page: &PageRequest) -> Result<ProductPage, sqlx::Error> {
        let (content, total) = ProductRepo::list_active(&self.pool, page).await?;
        Ok(ProductPage::new(content, total, page.page(), page.size()))
    }
}
