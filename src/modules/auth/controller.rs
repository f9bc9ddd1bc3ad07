use axum::Json;
use learnhub_core::{AppError, ErrorResponse};
use tracing::instrument;

use super::model::ProfileResponse;
use crate::middleware::auth::AuthUser;

/// Get the identity attached to the current request
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated caller", body = ProfileResponse),
        (status = 401, description = "Missing, malformed, invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Student account has been deactivated", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.id()))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<ProfileResponse>, AppError> {
    Ok(Json(ProfileResponse {
        success: true,
        user: auth_user.0.into(),
    }))
}
