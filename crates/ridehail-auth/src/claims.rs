use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Identity id (subject claim)
    pub sub: String,
    pub email: String,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// The subject parsed as an identity id, `None` when it is not a UUID.
    pub fn subject_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"5b0f1d4e-8a43-4a6e-9c53-2a9f0b1c7d11","email":"rider@test.com","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.email, "rider@test.com");
        assert_eq!(
            claims.subject_id(),
            Some(Uuid::parse_str("5b0f1d4e-8a43-4a6e-9c53-2a9f0b1c7d11").unwrap())
        );
    }

    #[test]
    fn test_subject_id_rejects_non_uuid() {
        let claims = Claims {
            sub: "64f1c0ffee".to_string(),
            email: "legacy@test.com".to_string(),
            exp: 1,
            iat: 0,
        };
        assert_eq!(claims.subject_id(), None);
    }
}
