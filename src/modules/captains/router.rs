use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{get_captain_profile, login_captain, logout_captain, register_captain};
use crate::middleware::auth::require_captain;
use crate::state::AppState;

pub fn init_captains_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(get_captain_profile))
        .route("/logout", get(logout_captain).post(logout_captain))
        .route_layer(middleware::from_fn_with_state(state, require_captain));

    Router::new()
        .route("/register", post(register_captain))
        .route("/login", post(login_captain))
        .merge(protected)
}
