//! Token revocation.
//!
//! Logout puts the session token on the blacklist. The authentication
//! middleware consults it on every request, and a background task deletes
//! entries once they pass the 24 hour TTL.

pub mod service;
