//! Shared utilities.
//!
//! - [`cookies`]: the session cookie set on login and cleared on logout
//! - [`db`]: database error helpers

pub mod cookies;
pub mod db;
