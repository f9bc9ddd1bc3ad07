//! Application configuration.
//!
//! Collects the per-concern configuration types from `learnhub-config` into a
//! single [`AppConfig`] loaded once at startup. Loading fails when a required
//! variable (`JWT_SECRET`, `DATABASE_URL`) is missing, so the server never
//! starts with a default secret.

pub use learnhub_config::{ConfigError, CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }
}
