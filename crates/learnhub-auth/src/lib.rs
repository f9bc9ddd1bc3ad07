//! # LearnHub Auth
//!
//! Caller identity and JWT utilities for the LearnHub API.
//!
//! - [`identity`]: the canonical [`Identity`] decoded from a bearer token
//! - [`jwt`]: token issuing and verification
//! - [`error`]: the [`AuthError`] rejection taxonomy
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::verify_token;
//! use learnhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let identity = verify_token(token, &config)?;
//! if identity.is_student() {
//!     // check the account is still active
//! }
//! ```

pub mod error;
pub mod identity;
pub mod jwt;

pub use error::AuthError;
pub use identity::{Identity, IdentityId, Role};
pub use jwt::{create_token, verify_token};
