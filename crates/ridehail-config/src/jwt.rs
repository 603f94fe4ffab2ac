/// Default lifetime of a session token: 24 hours, matching the blacklist TTL.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 86_400;

const DEV_SECRET: &str = "ridehail-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(crate::env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET is not set, falling back to an insecure development secret");
                DEV_SECRET.to_string()
            }
        };

        Self {
            secret,
            expiry: crate::parse_or(&lookup, "JWT_EXPIRY", DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }
}
