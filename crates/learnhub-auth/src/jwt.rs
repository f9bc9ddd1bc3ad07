//! HMAC token issuing and verification.
//!
//! Verification accepts HS256, HS384 and HS512 tokens signed with the
//! configured secret. `exp` is optional, but when present it must be in the
//! future (no leeway). The decoded claim set is normalized into an [`Identity`].
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::{Identity, Role, create_token, verify_token};
//!
//! let token = create_token(&Identity::new(42_i64, Some(Role::Student)), &config)?;
//! let identity = verify_token(&token, &config)?;
//! assert!(identity.is_student());
//! ```

use std::collections::HashSet;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde_json::Value;

use learnhub_config::JwtConfig;
use learnhub_core::AppError;

use crate::error::AuthError;
use crate::identity::Identity;

/// Claim set written by [`create_token`], matching the login flow's shape.
#[derive(Debug, Serialize)]
pub struct TokenClaims<'a> {
    pub user: &'a Identity,
    pub iat: usize,
    pub exp: usize,
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    // Tokens without `exp` never expire; `validate_exp` still applies when it is present.
    validation.required_spec_claims = HashSet::new();
    validation.leeway = 0;
    // Audience is not part of this service's tokens; don't fail tokens that carry one.
    validation.validate_aud = false;
    validation
}

/// Signs a token for `identity` that expires after `access_token_expiry` seconds.
pub fn create_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp().max(0) as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = TokenClaims {
        user: identity,
        iat: now,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies `token` and returns the caller identity it carries.
///
/// # Errors
///
/// - [`AuthError::InvalidToken`] for a bad signature, expiry, or malformed token
/// - [`AuthError::InvalidPayload`] when the claims carry no usable `id`
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Identity, AuthError> {
    let data = decode::<Value>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map_err(AuthError::InvalidToken)?;

    Identity::from_claims(&data.claims).ok_or(AuthError::InvalidPayload)
}
