//! # Ridehail DB
//!
//! Connection pool lifecycle for the ridehail API.
//!
//! The pool is built once in `main`, stored in the application state and
//! handed to every service explicitly. Nothing in the workspace reaches for
//! a global connection.
//!
//! # Example
//!
//! ```ignore
//! use ridehail_config::DatabaseConfig;
//! use ridehail_db::{close_db_pool, init_db_pool, run_migrations};
//!
//! let config = DatabaseConfig::from_env();
//! let pool = init_db_pool(&config).await;
//! run_migrations(&pool).await?;
//! // ... serve requests ...
//! close_db_pool(&pool).await;
//! ```

use std::str::FromStr;

use ridehail_config::DatabaseConfig;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{error, info, warn};

pub use sqlx::PgPool;

fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::from_str(&config.url).unwrap_or_else(|e| {
        error!(error = %e, "Invalid DB_CONNECT, falling back to libpq environment defaults");
        PgConnectOptions::new()
    })
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Opens the connection pool.
///
/// A failed connection is logged and the process carries on with a lazily
/// connecting pool: requests that need the database fail individually until
/// the server becomes reachable. There is no retry loop here.
pub async fn init_db_pool(config: &DatabaseConfig) -> PgPool {
    let options = connect_options(config);

    info!(
        max_connections = config.max_connections,
        "Initializing database connection pool"
    );

    match pool_options(config).connect_with(options.clone()).await {
        Ok(pool) => {
            info!("Database connected");
            pool
        }
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            pool_options(config).connect_lazy_with(options)
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Closes the pool, waiting for checked-out connections to be returned.
pub async fn close_db_pool(pool: &PgPool) {
    if pool.is_closed() {
        warn!("Database pool already closed");
        return;
    }
    pool.close().await;
    info!("Database pool closed");
}
