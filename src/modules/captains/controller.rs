use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use ridehail_core::AppError;
use ridehail_models::{
    Captain, CaptainAuthResponse, LoginRequest, MessageResponse, RegisterCaptainDto,
};

use super::service::CaptainService;
use crate::middleware::auth::{CurrentCaptain, SessionToken};
use crate::modules::blacklist::service::BlacklistService;
use crate::state::AppState;
use crate::utils::cookies::{cleared_session_cookie, session_cookie};
use crate::validator::ValidatedJson;

#[derive(Debug, Serialize, ToSchema)]
pub struct CaptainProfileResponse {
    pub captain: Captain,
}

/// Register a new captain with their vehicle
#[utoipa::path(
    post,
    path = "/captains/register",
    request_body = RegisterCaptainDto,
    responses(
        (status = 201, description = "Captain registered", body = CaptainAuthResponse),
        (status = 400, description = "Malformed body or email already registered", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse)
    ),
    tag = "Captains"
)]
#[instrument(skip_all)]
pub async fn register_captain(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterCaptainDto>,
) -> Result<(StatusCode, Json<CaptainAuthResponse>), AppError> {
    let response = CaptainService::register_captain(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/captains/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = CaptainAuthResponse),
        (status = 401, description = "Invalid email or password", body = MessageResponse)
    ),
    tag = "Captains"
)]
#[instrument(skip_all)]
pub async fn login_captain(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<CaptainAuthResponse>), AppError> {
    let response = CaptainService::login_captain(&state.db, dto, &state.jwt_config).await?;
    let jar = jar.add(session_cookie(response.token.clone()));
    Ok((jar, Json(response)))
}

#[utoipa::path(
    get,
    path = "/captains/profile",
    responses(
        (status = 200, description = "Captain profile", body = CaptainProfileResponse),
        (status = 401, description = "Missing, revoked or unknown token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Captains"
)]
#[instrument(skip_all)]
pub async fn get_captain_profile(
    CurrentCaptain(captain): CurrentCaptain,
) -> Json<CaptainProfileResponse> {
    Json(CaptainProfileResponse { captain })
}

#[utoipa::path(
    get,
    path = "/captains/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Missing, revoked or unknown token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Captains"
)]
#[instrument(skip_all)]
pub async fn logout_captain(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionToken(token): SessionToken,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    BlacklistService::blacklist(&state.db, &token).await?;
    let jar = jar.remove(cleared_session_cookie());
    Ok((jar, Json(MessageResponse::new("Logged out"))))
}
