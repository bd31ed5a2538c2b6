/// Blog Service Library
///
/// REST backend for users, posts, comments, and likes on top of PostgreSQL.
///
/// # Modules
///
/// - `routes`: The route table mapping method + path pattern to handlers
/// - `handlers`: Per-resource HTTP request handlers
/// - `db`: Repositories issuing parameterized SQL
/// - `models`: Row and response types
/// - `error`: Error taxonomy and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};

/// Shared state handed to every handler
///
/// The pool synchronizes access internally, so no extra locking is needed here.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
}

impl AppState {
    pub fn new(db: sqlx::PgPool) -> Self {
        Self { db }
    }
}
