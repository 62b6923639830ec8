//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::CredentialRow;

/// Credential repository trait
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by normalized email; absence is `Ok(None)`
    async fn find_by_email(&self, email: &str) -> DbResult<Option<CredentialRow>>;

    /// Find a credential by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<CredentialRow>>;

    /// Insert a new credential.
    ///
    /// Fails with `DbError::UniqueViolation` when a record with the same
    /// email already exists, including under a concurrent insert race.
    async fn create(&self, credential: NewCredential) -> DbResult<CredentialRow>;
}

/// Create credential input
#[derive(Clone)]
pub struct NewCredential {
    pub id: Uuid,
    pub email: String,
    pub password_hash: Vec<u8>,
    pub salt: Vec<u8>,
}

impl std::fmt::Debug for NewCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewCredential")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
