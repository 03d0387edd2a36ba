//! Product row, request DTOs, and paging types.
//!
//! The wire format is camelCase (`createdAt`, `totalElements`, ...); the
//! database columns stay snake_case, so `FromRow` maps by field name while
//! serde renames on the way out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use productsvc_core::types::{DbId, Timestamp};

/// Default page size for the active-product listing.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on requested page sizes.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `name` and `price` are required by the business rules but optional here:
/// their absence must surface as a validation error, not a deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// DTO for partially updating a product. Fields absent from the patch are
/// left untouched on the stored row: this is a merge, not a replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// A page request: zero-based page index, page size, and an optional
/// `"field,asc|desc"` sort spec.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageRequest {
    /// Requested page index, clamped to zero or greater.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    /// Requested page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset of the first element on the requested page. Saturates
    /// instead of overflowing on absurd page numbers, so the OFFSET bind can
    /// never go negative.
    pub fn offset(&self) -> i64 {
        self.page().saturating_mul(self.size())
    }

    /// Resolve the sort spec against the whitelisted sortable columns.
    ///
    /// Sort fields arrive in wire casing (`createdAt`), but snake_case is
    /// accepted too. Unknown fields and directions fall back to the default
    /// ordering, matching how unknown sort keys are tolerated rather than
    /// rejected.
    pub fn order_clause(&self) -> &'static str {
        const DEFAULT: &str = "id ASC";

        let Some(sort) = self.sort.as_deref() else {
            return DEFAULT;
        };
        let mut parts = sort.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        let desc = parts
            .next()
            .is_some_and(|dir| dir.trim().eq_ignore_ascii_case("desc"));

        match field {
            "id" => {
                if desc {
                    "id DESC"
                } else {
                    "id ASC"
                }
            }
            "name" => {
                if desc {
                    "name DESC"
                } else {
                    "name ASC"
                }
            }
            "price" => {
                if desc {
                    "price DESC"
                } else {
                    "price ASC"
                }
            }
            "createdAt" | "created_at" => {
                if desc {
                    "created_at DESC"
                } else {
                    "created_at ASC"
                }
            }
            "updatedAt" | "updated_at" => {
                if desc {
                    "updated_at DESC"
                } else {
                    "updated_at ASC"
                }
            }
            _ => DEFAULT,
        }
    }
}

/// One page of active products with paging metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub content: Vec<Product>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
}

impl ProductPage {
    pub fn new(content: Vec<Product>, total_elements: i64, number: i64, size: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            content,
            total_elements,
            total_pages,
            number,
            size,
        }
    }
}
