//! Database configuration.
//!
//! # Environment Variables
//!
//! - `DB_CONNECT`: PostgreSQL connection string
//! - `DB_MAX_CONNECTIONS`: pool size (default 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: how long a query waits for a connection (default 5)
//! - `DB_RUN_MIGRATIONS`: apply pending migrations at startup (default true)
//! - `BLACKLIST_PURGE_INTERVAL_SECS`: cadence of the expired-blacklist sweep (default 3600)

use std::time::Duration;

const DEFAULT_URL: &str = "postgres://localhost:5432/ridehail";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
    pub blacklist_purge_interval: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DB_CONNECT").filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => {
                tracing::warn!(default = DEFAULT_URL, "DB_CONNECT is not set");
                DEFAULT_URL.to_string()
            }
        };

        Self {
            url,
            max_connections: crate::parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
            acquire_timeout: Duration::from_secs(crate::parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                5,
            )),
            run_migrations: lookup("DB_RUN_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(true),
            blacklist_purge_interval: Duration::from_secs(
                crate::parse_or(&lookup, "BLACKLIST_PURGE_INTERVAL_SECS", 3600u64).max(1),
            ),
        }
    }
}
