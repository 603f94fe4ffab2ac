//! Rider accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A rider. The password hash never leaves the database layer.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub socket_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row used by the login flow, the only place the hash is read.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(length(min = 3, message = "First name must be at least 3 characters long"))]
    pub first_name: String,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    #[schema(example = "hunter22")]
    pub password: String,
}
