//! The identity resolved by the authentication middleware.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::captains::Captain;
use crate::users::User;

/// Which collection a session token is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    User,
    Captain,
}

impl IdentityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityKind::User => "user",
            IdentityKind::Captain => "captain",
        }
    }

    /// Rejection message when a verified token points at a missing record.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            IdentityKind::User => "Unauthorized: User not found",
            IdentityKind::Captain => "Unauthorized: Captain not found",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user or captain record attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "identity", rename_all = "lowercase")]
pub enum Identity {
    User(User),
    Captain(Captain),
}

impl Identity {
    pub fn kind(&self) -> IdentityKind {
        match self {
            Identity::User(_) => IdentityKind::User,
            Identity::Captain(_) => IdentityKind::Captain,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
            Identity::Captain(captain) => captain.id,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Identity::User(user) => Some(user),
            Identity::Captain(_) => None,
        }
    }

    pub fn as_captain(&self) -> Option<&Captain> {
        match self {
            Identity::Captain(captain) => Some(captain),
            Identity::User(_) => None,
        }
    }
}
