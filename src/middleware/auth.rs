use std::borrow::Cow;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use learnhub_auth::{AuthError, Identity, IdentityId, Role, verify_token};
use learnhub_core::AppError;
use learnhub_db::AccountStatus;
use tracing::{error, info, warn};

use crate::state::AppState;

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The header map lookup is case-insensitive. The value must be exactly two
/// parts separated by a single space, the first being `Bearer`. Invalid UTF-8
/// is replaced rather than rejected, leaving the verifier to fail the token.
pub fn bearer_token(headers: &HeaderMap) -> Result<Cow<'_, str>, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingHeader)?;

    match String::from_utf8_lossy(value.as_bytes()) {
        Cow::Borrowed(value) => split_bearer(value).map(Cow::Borrowed),
        Cow::Owned(value) => split_bearer(&value).map(|token| Cow::Owned(token.to_string())),
    }
}

fn split_bearer(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::InvalidHeaderFormat),
    }
}

/// Resolves the caller identity for a request.
///
/// Students are additionally checked against the account store. A store
/// failure is logged and the request is let through.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Identity, AuthError> {
    let token = bearer_token(headers)?;

    let identity = verify_token(&token, &state.jwt_config).inspect_err(|err| {
        if let AuthError::InvalidToken(source) = err {
            warn!(error = %source, "Token verification failed");
        }
    })?;

    if identity.is_student() {
        match state.accounts.account_status(&identity.id).await {
            Ok(AccountStatus::Inactive) => {
                info!(student_id = %identity.id, "Rejected request from deactivated student account");
                return Err(AuthError::AccountDeactivated);
            }
            Ok(AccountStatus::Active | AccountStatus::Unknown) => {}
            Err(err) => {
                error!(
                    student_id = %identity.id,
                    error = %err,
                    "Failed to check student account status, allowing request"
                );
            }
        }
    }

    Ok(identity)
}

/// Route layer that rejects unauthenticated requests and stores the
/// [`Identity`] in the request extensions for downstream handlers.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/me", get(me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = authenticate(&state, req.headers()).await?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extractor for the authenticated caller.
///
/// Uses the identity stored by [`require_auth`] when the route is layered,
/// and authenticates the request itself otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn id(&self) -> &IdentityId {
        &self.0.id
    }

    pub fn role(&self) -> Option<&Role> {
        self.0.role.as_ref()
    }

    pub fn is_student(&self) -> bool {
        self.0.is_student()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(AuthUser(identity.clone()));
        }

        let identity = authenticate(state, &parts.headers).await?;
        Ok(AuthUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_missing() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_bearer_token_empty_value_counts_as_missing() {
        assert!(matches!(
            bearer_token(&headers_with("")),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_bearer_token_valid() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_lowercase_header_name() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer t"));
        assert_eq!(bearer_token(&headers).unwrap(), "t");
    }

    #[test]
    fn test_bearer_token_bad_formats() {
        for value in [
            "Token abc",
            "Bearer",
            "Bearer a b",
            "bearer abc",
            "Bearer  abc",
            "abc",
        ] {
            assert!(
                matches!(
                    bearer_token(&headers_with(value)),
                    Err(AuthError::InvalidHeaderFormat)
                ),
                "accepted {value:?}"
            );
        }
    }

    #[test]
    fn test_bearer_token_empty_token_passes_format_check() {
        // Left for the verifier to reject.
        assert_eq!(bearer_token(&headers_with("Bearer ")).unwrap(), "");
    }

    #[test]
    fn test_bearer_token_non_utf8_value_is_decoded_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(bearer_token(&headers).unwrap(), "\u{fffd}token");
    }

    #[test]
    fn test_bearer_token_non_utf8_scheme_is_bad_format() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer\xff token").unwrap(),
        );
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidHeaderFormat)
        ));
    }
}
