//! # Ridehail Core
//!
//! Foundational types shared by every ridehail crate:
//!
//! - [`errors`]: [`AppError`], the error type every handler and service returns
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use ridehail_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret-password")?;
//! if !verify_password("secret-password", &hash)? {
//!     return Err(AppError::unauthorized("Invalid email or password"));
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
