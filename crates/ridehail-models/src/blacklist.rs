//! Revoked session tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Seconds a revoked token stays on the blacklist.
pub const BLACKLIST_TTL_SECS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlacklistToken {
    pub token: String,
    pub blacklisted_at: DateTime<Utc>,
}

impl BlacklistToken {
    /// Entries blacklisted at or before this instant have expired.
    pub fn cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(BLACKLIST_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_one_day_back() {
        let now = Utc::now();
        let cutoff = BlacklistToken::cutoff(now);

        assert_eq!(now - cutoff, Duration::hours(24));
        assert!(now - Duration::hours(23) > cutoff);
    }
}
