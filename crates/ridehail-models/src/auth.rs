//! Login payloads and token responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::captains::Captain;
use crate::users::User;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    #[schema(example = "hunter22")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserAuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaptainAuthResponse {
    pub token: String,
    pub captain: Captain,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
