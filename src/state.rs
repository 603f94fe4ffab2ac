use ridehail_config::{CorsConfig, JwtConfig};
use sqlx::PgPool;

/// Shared application state handed to every router, middleware and handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

/// Builds the state around an already-initialized pool, reading the rest
/// of the configuration from the environment.
pub fn init_app_state(db: PgPool) -> AppState {
    AppState {
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
