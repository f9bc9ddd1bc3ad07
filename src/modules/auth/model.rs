use learnhub_auth::{Identity, IdentityId, Role};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// The caller identity as seen by downstream handlers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    /// Account id, numeric or string
    #[schema(value_type = Object, example = 42)]
    pub id: IdentityId,
    #[schema(value_type = Option<String>, example = "student")]
    pub role: Option<Role>,
    /// Remaining identity claims carried by the token
    #[schema(value_type = Object)]
    pub claims: Map<String, Value>,
}

impl From<Identity> for UserProfile {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            role: identity.role,
            claims: identity.attributes,
        }
    }
}
