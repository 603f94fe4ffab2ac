use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use sqlx::PgPool;
use tracing::{Span, debug, field};
use uuid::Uuid;

use ridehail_auth::verify_token;
use ridehail_core::AppError;
use ridehail_models::{Captain, Identity, IdentityKind, User};

use crate::modules::blacklist::service::BlacklistService;
use crate::modules::captains::service::CaptainService;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

pub const MISSING_TOKEN_MESSAGE: &str = "Access denied. No token provided.";
pub const BLACKLISTED_TOKEN_MESSAGE: &str = "Token is blacklisted. Please log in again.";

/// The raw session token of an authenticated request, kept so logout can revoke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

/// Reads the session token, preferring the cookie over the `Authorization` header.
/// Blank values count as absent.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_string)
}

fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

/// Authenticates a request against the collection selected by `kind`.
///
/// Checks run in a fixed order and the first failure wins:
///
/// | Check | Rejection |
/// |---|---|
/// | no token in cookie or header | 401 `Access denied. No token provided.` |
/// | token on the blacklist | 401 `Token is blacklisted. Please log in again.` |
/// | bad signature, expired, malformed | 400 `Unauthorized` |
/// | subject missing from the collection | 401 `Unauthorized: User not found` (or `Captain`) |
///
/// Database failures surface as 500.
pub async fn authenticate(
    state: &AppState,
    kind: IdentityKind,
    headers: &HeaderMap,
) -> Result<(Identity, SessionToken), AppError> {
    let token =
        extract_token(headers).ok_or_else(|| AppError::unauthorized(MISSING_TOKEN_MESSAGE))?;

    if BlacklistService::is_blacklisted(&state.db, &token).await? {
        return Err(AppError::unauthorized(BLACKLISTED_TOKEN_MESSAGE));
    }

    let claims = verify_token(&token, &state.jwt_config)?;
    let subject = claims
        .subject_id()
        .ok_or_else(|| AppError::bad_request(anyhow!("Unauthorized")))?;

    let identity = resolve_identity(&state.db, kind, subject)
        .await?
        .ok_or_else(|| AppError::unauthorized(kind.not_found_message()))?;

    Ok((identity, SessionToken(token)))
}

async fn resolve_identity(
    db: &PgPool,
    kind: IdentityKind,
    id: Uuid,
) -> Result<Option<Identity>, AppError> {
    let identity = match kind {
        IdentityKind::User => UserService::find_by_id(db, id).await?.map(Identity::User),
        IdentityKind::Captain => CaptainService::find_by_id(db, id)
            .await?
            .map(Identity::Captain),
    };
    Ok(identity)
}

/// Runs [`authenticate`] and, on success, stores the [`Identity`] and
/// [`SessionToken`] in the request extensions before continuing.
pub async fn require_identity(
    state: AppState,
    kind: IdentityKind,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let outcome = authenticate(&state, kind, &parts.headers).await;

    match outcome {
        Ok((identity, token)) => {
            let span = Span::current();
            span.record("identity_kind", identity.kind().as_str());
            span.record("identity_id", field::display(identity.id()));
            debug!(kind = %identity.kind(), identity_id = %identity.id(), "Request authenticated");
            parts.extensions.insert(identity);
            parts.extensions.insert(token);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => {
            debug!(
                kind = %kind,
                status = %err.status.as_u16(),
                reason = %err.error,
                "Authentication rejected"
            );
            err.into_response()
        }
    }
}

/// Route layer for rider endpoints.
///
/// ```rust,ignore
/// Router::new()
///     .route("/profile", get(get_user_profile))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_user));
/// ```
pub async fn require_user(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_identity(state, IdentityKind::User, req, next).await
}

/// Route layer for captain endpoints.
pub async fn require_captain(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_identity(state, IdentityKind::Captain, req, next).await
}

fn current_identity(parts: &Parts) -> Result<&Identity, AppError> {
    parts
        .extensions
        .get::<Identity>()
        .ok_or_else(|| AppError::internal_error("Authenticated identity missing from request"))
}

/// The rider resolved by [`require_user`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_identity(parts)?
            .as_user()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::internal_error("Route expected a user identity"))
    }
}

/// The captain resolved by [`require_captain`].
#[derive(Debug, Clone)]
pub struct CurrentCaptain(pub Captain);

impl<S> FromRequestParts<S> for CurrentCaptain
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_identity(parts)?
            .as_captain()
            .cloned()
            .map(CurrentCaptain)
            .ok_or_else(|| AppError::internal_error("Route expected a captain identity"))
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or_else(|| AppError::internal_error("Session token missing from request"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_no_token_anywhere() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_token_from_cookie() {
        let map = headers(&[(header::COOKIE, "theme=dark; token=abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let map = headers(&[(header::AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_cookie_wins_over_header() {
        let map = headers(&[
            (header::COOKIE, "token=from-cookie"),
            (header::AUTHORIZATION, "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_empty_cookie_falls_back_to_header() {
        let map = headers(&[
            (header::COOKIE, "token="),
            (header::AUTHORIZATION, "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_malformed_authorization_headers() {
        for value in ["Bearer", "Bearer    ", "abc.def.ghi", "Basic dXNlcjpwYXNz"] {
            let map = headers(&[(header::AUTHORIZATION, value)]);
            assert_eq!(extract_token(&map), None, "header {:?}", value);
        }
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token("bearer t0k3n"), Some("t0k3n"));
        assert_eq!(bearer_token("BEARER t0k3n"), Some("t0k3n"));
    }
}
