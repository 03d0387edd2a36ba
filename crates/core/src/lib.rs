//! Domain types, error taxonomy, and pure product validation rules.
//!
//! This crate has no internal dependencies and no I/O: everything here can be
//! exercised without a database or an HTTP stack.

pub mod error;
pub mod product;
pub mod types;
