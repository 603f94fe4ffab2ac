use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use ridehail_config::CorsConfig;

use crate::docs::openapi_json;
use crate::logging::logging_middleware;
use crate::modules::captains::router::init_captains_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

async fn hello_world() -> &'static str {
    "Hello World!"
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_world))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/users", init_users_router(state.clone()))
        .nest("/captains", init_captains_router(state.clone()))
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}
