//! Request middleware.
//!
//! - [`api_key::require_api_key`] -- static shared-secret gate for `/api/v1`.
//! - [`error_path::attach_error_path`] -- adds the request path to JSON
//!   error bodies.

pub mod api_key;
pub mod error_path;
