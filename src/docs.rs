use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{ProfileResponse, UserProfile};
use crate::modules::health::controller::HealthResponse;
use learnhub_core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::get_me,
        crate::modules::health::controller::health,
    ),
    components(
        schemas(
            ProfileResponse,
            UserProfile,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Caller identity endpoints"),
        (name = "Health", description = "Service liveness")
    ),
    info(
        title = "LearnHub API",
        version = "0.1.0",
        description = "Student learning-management API with JWT bearer authentication and account-status enforcement.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
