//! Rejection reasons produced while authenticating a request.
//!
//! The `Display` text of each variant is exactly what the caller sees. Token
//! verification failures keep their underlying cause as the error source so it
//! can be logged, but it never reaches the response body.

use learnhub_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingHeader,

    #[error("Invalid Authorization header format")]
    InvalidHeaderFormat,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token payload")]
    InvalidPayload,

    /// Authenticated, but the student account has been switched off.
    #[error("Your account has been deactivated. Please contact support for assistance.")]
    AccountDeactivated,
}

impl AuthError {
    /// Authorization failures are 403; everything else is an authentication failure.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::AccountDeactivated)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        if err.is_forbidden() {
            AppError::forbidden(err.to_string())
        } else {
            AppError::unauthorized(err.to_string())
        }
    }
}
