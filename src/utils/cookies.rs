use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::middleware::auth::TOKEN_COOKIE;

/// HttpOnly cookie carrying the session token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie matching [`session_cookie`]'s name and path, for removal from a jar.
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE).path("/").build()
}
