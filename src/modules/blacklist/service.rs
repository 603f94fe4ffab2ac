use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use ridehail_core::AppError;
use ridehail_models::BlacklistToken;

pub struct BlacklistService;

impl BlacklistService {
    /// Whether `token` was revoked within the last 24 hours. Exact string match.
    #[instrument(skip_all)]
    pub async fn is_blacklisted(db: &PgPool, token: &str) -> Result<bool, AppError> {
        let cutoff = BlacklistToken::cutoff(Utc::now());

        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM blacklist_tokens WHERE token = $1 AND blacklisted_at > $2)",
        )
        .bind(token)
        .bind(cutoff)
        .fetch_one(db)
        .await?;

        Ok(found)
    }

    /// Revokes `token`. Revoking again restarts its 24 hour window.
    ///
    /// Stamped with the application clock, the same one the TTL cutoff uses.
    #[instrument(skip_all)]
    pub async fn blacklist(db: &PgPool, token: &str) -> Result<BlacklistToken, AppError> {
        let entry = sqlx::query_as::<_, BlacklistToken>(
            "INSERT INTO blacklist_tokens (token, blacklisted_at)
             VALUES ($1, $2)
             ON CONFLICT (token) DO UPDATE SET blacklisted_at = EXCLUDED.blacklisted_at
             RETURNING token, blacklisted_at",
        )
        .bind(token)
        .bind(Utc::now())
        .fetch_one(db)
        .await?;

        debug!(blacklisted_at = %entry.blacklisted_at, "Token blacklisted");
        Ok(entry)
    }

    /// Deletes entries older than the TTL and returns how many went.
    #[instrument(skip_all)]
    pub async fn purge_expired(db: &PgPool) -> Result<u64, AppError> {
        let cutoff = BlacklistToken::cutoff(Utc::now());

        let result = sqlx::query("DELETE FROM blacklist_tokens WHERE blacklisted_at <= $1")
            .bind(cutoff)
            .execute(db)
            .await?;

        Ok(result.rows_affected())
    }

    /// Spawns the periodic purge. The task exits once the pool is closed.
    pub fn spawn_purge_task(db: PgPool, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if db.is_closed() {
                    break;
                }

                match Self::purge_expired(&db).await {
                    Ok(0) => {}
                    Ok(purged) => info!(purged, "Purged expired blacklist entries"),
                    Err(err) => warn!(error = %err, "Blacklist purge failed"),
                }
            }
        })
    }
}
