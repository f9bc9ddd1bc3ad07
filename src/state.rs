use std::sync::Arc;

use anyhow::Context;

use learnhub_config::{CorsConfig, JwtConfig};
use learnhub_db::{AccountStore, PgAccountStore, init_db_pool};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub accounts: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects the account store's pool and assembles the shared state.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    Ok(AppState {
        jwt_config: config.jwt.clone(),
        cors_config: config.cors.clone(),
        accounts: Arc::new(PgAccountStore::new(pool)),
    })
}
