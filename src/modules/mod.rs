//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic and queries
//! - `router.rs`: Axum router configuration
//!
//! [`blacklist`] has no routes of its own; logout and the auth middleware use it.

pub mod blacklist;
pub mod captains;
pub mod users;
