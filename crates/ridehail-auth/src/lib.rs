//! # Ridehail Auth
//!
//! Session token primitives for the ridehail API.
//!
//! - [`claims`]: the JWT payload carried by every session token
//! - [`jwt`]: token issuing and verification
//!
//! Users and captains receive the same kind of token. A token carries only
//! the subject id; which collection it resolves against is decided by the
//! route that receives it.
//!
//! # Example
//!
//! ```ignore
//! use ridehail_auth::{create_token, verify_token};
//! use ridehail_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(user_id, "rider@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.subject_id(), Some(user_id));
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_token, verify_token};
