//! Middleware for request processing.
//!
//! - [`auth`]: session token authentication for user and captain routes
//!
//! # Authentication Flow
//!
//! 1. The token is read from the `token` cookie, else from `Authorization: Bearer <token>`
//! 2. Revoked (blacklisted) tokens are rejected before any signature check
//! 3. The token signature and expiry are verified
//! 4. The subject is loaded from the collection the route protects
//! 5. The resolved [`Identity`](ridehail_models::Identity) is attached to the request
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::{CurrentUser, require_user};
//!
//! async fn profile(CurrentUser(user): CurrentUser) -> Json<User> {
//!     Json(user)
//! }
//!
//! let routes = Router::new()
//!     .route("/profile", get(profile))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_user));
//! ```

pub mod auth;
