use dotenvy::dotenv;
use tracing::{error, info};

use ridehail::logging::init_tracing;
use ridehail::modules::blacklist::service::BlacklistService;
use ridehail::router::init_router;
use ridehail::state::init_app_state;
use ridehail_config::{DatabaseConfig, ServerConfig};
use ridehail_db::{close_db_pool, init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let pool = init_db_pool(&database_config).await;

    if database_config.run_migrations
        && let Err(e) = run_migrations(&pool).await
    {
        error!(error = %e, "Failed to run database migrations");
    }

    let purge_task =
        BlacklistService::spawn_purge_task(pool.clone(), database_config.blacklist_purge_interval);

    let app = init_router(init_app_state(pool.clone()));

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purge_task.abort();
    close_db_pool(&pool).await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
