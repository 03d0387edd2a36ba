//! Pure validation rules for product fields.
//!
//! Every rule is a side-effect-free function returning
//! [`CoreError::Validation`] on failure. The service layer runs these before
//! any store round-trip, so the SQL layer stays free of business rules.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Minimum length of a product name (after trimming).
pub const MIN_NAME_LEN: usize = 2;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum number of integer digits in a price.
pub const MAX_PRICE_INTEGER_DIGITS: u32 = 10;

/// Maximum number of fraction digits in a price.
pub const MAX_PRICE_FRACTION_DIGITS: u32 = 2;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a product id from a path or payload. Ids are store-assigned
/// BIGSERIAL values, so zero and negatives can never refer to a row.
pub fn validate_id(id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(
            "Product id must be a positive number".into(),
        ));
    }
    Ok(())
}

/// Validate a product name: required, non-blank after trimming, and between
/// [`MIN_NAME_LEN`] and [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Product name is required".into()));
    }
    let len = trimmed.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Product name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a product price: strictly positive, at most
/// [`MAX_PRICE_INTEGER_DIGITS`] integer digits and
/// [`MAX_PRICE_FRACTION_DIGITS`] fraction digits.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price <= Decimal::ZERO {
        return Err(CoreError::Validation(
            "Product price must be greater than zero".into(),
        ));
    }
    // normalize() strips trailing zeros, so 10.10 and 10.100 both pass.
    if price.normalize().scale() > MAX_PRICE_FRACTION_DIGITS {
        return Err(CoreError::Validation(format!(
            "Product price allows at most {MAX_PRICE_FRACTION_DIGITS} fraction digits"
        )));
    }
    if price >= Decimal::from(10u64.pow(MAX_PRICE_INTEGER_DIGITS)) {
        return Err(CoreError::Validation(format!(
            "Product price allows at most {MAX_PRICE_INTEGER_DIGITS} integer digits"
        )));
    }
    Ok(())
}

/// Validate a product description. Descriptions are optional; the empty
/// string is a legal stored value, distinct from "absent".
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Product description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
