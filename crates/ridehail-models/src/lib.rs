//! # Ridehail Models
//!
//! Database entities, request/response DTOs and validation schemas.
//!
//! # Modules
//!
//! - [`users`]: riders
//! - [`captains`]: drivers and their vehicles
//! - [`blacklist`]: revoked session tokens
//! - [`identity`]: the resolved identity attached to authenticated requests
//! - [`auth`]: login payloads and token responses

pub mod auth;
pub mod blacklist;
pub mod captains;
pub mod identity;
pub mod users;

pub use auth::{CaptainAuthResponse, LoginRequest, MessageResponse, UserAuthResponse};
pub use blacklist::{BLACKLIST_TTL_SECS, BlacklistToken};
pub use captains::{
    Captain, CaptainRow, CaptainStatus, CaptainWithPassword, Location, RegisterCaptainDto,
    Vehicle, VehicleDto, VehicleType,
};
pub use identity::{Identity, IdentityKind};
pub use users::{RegisterUserDto, User, UserWithPassword};
