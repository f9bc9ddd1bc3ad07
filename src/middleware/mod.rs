//! Middleware and extractors for request processing.
//!
//! - [`auth`]: the bearer-token gate and the [`auth::AuthUser`] extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and normalizes the identity
//! 3. Student identities are checked against the account store
//! 4. The identity is stored in the request extensions
//! 5. Handlers read it through [`auth::AuthUser`]
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::{AuthUser, require_auth};
//!
//! async fn profile(auth_user: AuthUser) -> String {
//!     auth_user.id().to_string()
//! }
//!
//! let protected = Router::new()
//!     .route("/profile", get(profile))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
