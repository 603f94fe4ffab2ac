//! Session token issuing and verification (HS256, shared secret).

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use ridehail_config::JwtConfig;
use ridehail_core::AppError;

use crate::claims::Claims;

/// Issues a session token for `subject`, valid for `jwt_config.expiry` seconds.
pub fn create_token(
    subject: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.expiry.max(0) as usize;

    let claims = Claims {
        sub: subject.to_string(),
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// A bad signature, an expired token and a malformed token all produce the
/// same `400 Unauthorized` rejection. Expiry is enforced to the second.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::bad_request(UnauthorizedToken(e)))
}

/// Token rejection; displays as the bare `Unauthorized` clients see, while
/// keeping the underlying reason available through `Debug` for logs.
#[derive(Debug)]
pub struct UnauthorizedToken(pub jsonwebtoken::errors::Error);

impl std::fmt::Display for UnauthorizedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Unauthorized")
    }
}

impl std::error::Error for UnauthorizedToken {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
