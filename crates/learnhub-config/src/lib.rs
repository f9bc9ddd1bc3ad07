//! # LearnHub Config
//!
//! Configuration types for the LearnHub API, loaded from environment variables.
//!
//! - [`jwt`]: JWT signing secret and token lifetime
//! - [`database`]: Postgres connection settings
//! - [`cors`]: allowed dashboard origins
//! - [`server`]: bind address
//!
//! Every type has a `from_env` constructor and a `from_lookup` constructor that
//! takes a variable lookup closure, so parsing can be exercised without touching
//! the process environment.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_config::{CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads a variable from the process environment.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses an optional variable, falling back to `default` when it is unset.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
        None => Ok(default),
    }
}
