//! Request handlers.
//!
//! Handlers stay thin: they deserialize the request, delegate to
//! [`ProductService`](crate::service::ProductService), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod products;
