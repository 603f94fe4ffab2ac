use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{get_user_profile, login_user, logout_user, register_user};
use crate::middleware::auth::require_user;
use crate::state::AppState;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(get_user_profile))
        .route("/logout", get(logout_user).post(logout_user))
        .route_layer(middleware::from_fn_with_state(state, require_user));

    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .merge(protected)
}
