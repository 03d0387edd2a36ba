use std::sync::Arc;

use productsvc_db::store::PgProductStore;

use crate::config::ServerConfig;
use crate::service::ProductService;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or wraps a pool).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: productsvc_db::DbPool,
    /// Server configuration (API-key gate, timeouts).
    pub config: Arc<ServerConfig>,
    /// Product service bound to the Postgres store.
    pub products: ProductService<PgProductStore>,
}
