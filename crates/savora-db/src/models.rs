//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use savora_types::{PublicUser, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Credential row from the `users` table
#[derive(Clone, FromRow)]
pub struct CredentialRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: Vec<u8>,
    pub salt: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl CredentialRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }

    /// Public representation with `password_hash` and `salt` stripped
    pub fn sanitized(&self) -> PublicUser {
        PublicUser {
            id: UserId(self.id),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

// Hash and salt stay out of debug output.
impl std::fmt::Debug for CredentialRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRow")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CredentialRow {
        CredentialRow {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            password_hash: vec![1u8; 16],
            salt: vec![2u8; 16],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sanitized_strips_secret_fields() {
        let row = row();
        let user = row.sanitized();
        assert_eq!(user.id.0, row.id);
        assert_eq!(user.email, row.email);
    }

    #[test]
    fn test_debug_redacts_secret_fields() {
        let printed = format!("{:?}", row());
        assert!(!printed.contains("password_hash"));
        assert!(!printed.contains("salt"));
    }
}
