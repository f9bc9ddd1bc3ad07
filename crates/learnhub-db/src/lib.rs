//! # LearnHub DB
//!
//! Database pool and the student account store for the LearnHub API.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use learnhub_config::DatabaseConfig;
//! use learnhub_db::{AccountStore, PgAccountStore, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! let accounts: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(pool));
//! ```

pub mod accounts;

use learnhub_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use accounts::{AccountStatus, AccountStore, AccountStoreError, PgAccountStore};
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool using `config`.
///
/// The acquire timeout bounds how long an account lookup can wait for a
/// connection; past it the lookup fails instead of stalling the request.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}
