//! Product service: field validation, partial-update merge, and the
//! soft-delete state transition, orchestrated over an injected
//! [`ProductStore`].
//!
//! Every operation validates its input before the first store round-trip and
//! runs as one atomic unit of work against the store. Absence on lookup is
//! `Ok(None)`, not an error; everything else surfaces as a tagged
//! [`CoreError`] kind.

use productsvc_core::error::CoreError;
use productsvc_core::product as rules;
use productsvc_core::types::DbId;
use productsvc_db::models::product::{
    CreateProduct, PageRequest, Product, ProductPage, UpdateProduct,
};
use productsvc_db::store::{DeleteOutcome, ProductChanges, ProductStore};

use crate::error::{AppError, AppResult};

/// Orchestrates product CRUD over a store injected at construction time.
#[derive(Clone)]
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new product. The stored row is normalized: trimmed name,
    /// trimmed description (absent stays absent), `deleted` forced to false.
    pub async fn create(&self, input: &CreateProduct) -> AppResult<Product> {
        let name = input.name.as_deref().unwrap_or("").trim();
        rules::validate_name(name)?;

        let price = input
            .price
            .ok_or_else(|| CoreError::Validation("Product price is required".into()))?;
        rules::validate_price(price)?;

        let description = input.description.as_deref().map(str::trim);
        if let Some(d) = description {
            rules::validate_description(d)?;
        }

        let created = self.store.insert(name, price, description).await?;
        tracing::info!(id = created.id, name = %created.name, "Product created");
        Ok(created)
    }

    /// Fetch a product by id. Absence is `Ok(None)`, not an error.
    ///
    /// Soft-deleted rows are still returned by direct lookup; only the
    /// active listing filters them out.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Product>> {
        rules::validate_id(id)?;
        Ok(self.store.find_by_id(id).await?)
    }

    /// One page of active products with total-count metadata.
    pub async fn list(&self, page: &PageRequest) -> AppResult<ProductPage> {
        Ok(self.store.list_active(page).await?)
    }

    /// Partial update: only fields present in the patch overwrite the stored
    /// row, absent fields stay untouched. A merge, never a replace.
    ///
    /// Existence is resolved before the patch fields: a missing row is
    /// `NotFound` even when the patch would not validate.
    pub async fn update(&self, id: DbId, patch: &UpdateProduct) -> AppResult<Product> {
        rules::validate_id(id)?;
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            }));
        }
        let changes = validated_changes(patch)?;

        match self.store.apply_changes(id, &changes).await? {
            Some(updated) => {
                tracing::info!(id, "Product updated");
                Ok(updated)
            }
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            })),
        }
    }

    /// Soft-delete a product. A second delete attempt on an already-deleted
    /// row is rejected rather than silently accepted, so callers can detect
    /// redundant deletes.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        rules::validate_id(id)?;

        match self.store.soft_delete(id).await? {
            DeleteOutcome::Deleted => {
                tracing::info!(id, "Product soft-deleted");
                Ok(())
            }
            DeleteOutcome::AlreadyDeleted => Err(AppError::Core(CoreError::Validation(format!(
                "Product with id {id} is already deleted"
            )))),
            DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
                entity: "Product",
                id,
            })),
        }
    }
}

/// Validate each present patch field and normalize it for the merge.
///
/// Present fields follow the creation rules, with one exception: an empty
/// description is a legal overwrite (distinct from an absent one).
fn validated_changes(patch: &UpdateProduct) -> Result<ProductChanges, CoreError> {
    let mut changes = ProductChanges::default();

    if let Some(name) = patch.name.as_deref() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "Product name must not be blank".into(),
            ));
        }
        rules::validate_name(trimmed)?;
        changes.name = Some(trimmed.to_string());
    }

    if let Some(price) = patch.price {
        rules::validate_price(price)?;
        changes.price = Some(price);
    }

    if let Some(description) = patch.description.as_deref() {
        let trimmed = description.trim();
        rules::validate_description(trimmed)?;
        changes.description = Some(trimmed.to_string());
    }

    Ok(changes)
}
