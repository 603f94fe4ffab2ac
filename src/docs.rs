use axum::Json;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::captains::controller::CaptainProfileResponse;
use ridehail_models::{
    Captain, CaptainAuthResponse, CaptainStatus, LoginRequest, Location, MessageResponse,
    RegisterCaptainDto, RegisterUserDto, User, UserAuthResponse, Vehicle, VehicleDto, VehicleType,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::users::controller::get_user_profile,
        crate::modules::users::controller::logout_user,
        crate::modules::captains::controller::register_captain,
        crate::modules::captains::controller::login_captain,
        crate::modules::captains::controller::get_captain_profile,
        crate::modules::captains::controller::logout_captain,
    ),
    components(
        schemas(
            User,
            RegisterUserDto,
            UserAuthResponse,
            Captain,
            CaptainStatus,
            Vehicle,
            VehicleType,
            VehicleDto,
            Location,
            RegisterCaptainDto,
            CaptainAuthResponse,
            CaptainProfileResponse,
            LoginRequest,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Rider registration, login and sessions"),
        (name = "Captains", description = "Captain registration, login and sessions")
    ),
    info(
        title = "Ridehail API",
        version = "0.1.0",
        description = "Identity service for riders and captains with revocable JWT sessions.",
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
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
