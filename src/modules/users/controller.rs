use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use tracing::instrument;

use ridehail_core::AppError;
use ridehail_models::{LoginRequest, MessageResponse, RegisterUserDto, User, UserAuthResponse};

use super::service::UserService;
use crate::middleware::auth::{CurrentUser, SessionToken};
use crate::modules::blacklist::service::BlacklistService;
use crate::state::AppState;
use crate::utils::cookies::{cleared_session_cookie, session_cookie};
use crate::validator::ValidatedJson;

/// Register a new rider
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserAuthResponse),
        (status = 400, description = "Malformed body or email already registered", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<UserAuthResponse>), AppError> {
    let response = UserService::register_user(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in and receive a session token (also set as the `token` cookie)
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserAuthResponse),
        (status = 401, description = "Invalid email or password", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<UserAuthResponse>), AppError> {
    let response = UserService::login_user(&state.db, dto, &state.jwt_config).await?;
    let jar = jar.add(session_cookie(response.token.clone()));
    Ok((jar, Json(response)))
}

/// Profile of the authenticated rider
#[utoipa::path(
    get,
    path = "/users/profile",
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 400, description = "Invalid or expired token", body = MessageResponse),
        (status = 401, description = "Missing, revoked or unknown token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_user_profile(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// Revoke the current session token
#[utoipa::path(
    get,
    path = "/users/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "Missing, revoked or unknown token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn logout_user(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionToken(token): SessionToken,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    BlacklistService::blacklist(&state.db, &token).await?;
    let jar = jar.remove(cleared_session_cookie());
    Ok((jar, Json(MessageResponse::new("Logged out"))))
}
