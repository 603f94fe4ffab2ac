//! # Ridehail Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`database`]: connection string, pool size, migrations, blacklist purge cadence
//! - [`cors`]: allowed origins
//! - [`server`]: bind address
//!
//! Every struct exposes `from_env()` for production use and `from_lookup()`
//! so tests can feed values without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use ridehail_config::{DatabaseConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` through `lookup` and parses it, falling back to `default`
/// when the variable is unset or unparsable.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
