use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Kinds, not transport codes: the HTTP boundary decides how each variant
/// maps to a status. `Unauthorized` and `Forbidden` are raised only by the
/// API-key gate, never by the product service itself.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
