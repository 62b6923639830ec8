//! PostgreSQL credential repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::CredentialRow;
use crate::repo::{CredentialRepository, NewCredential};

/// PostgreSQL credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new credential repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<CredentialRow>> {
        let credential = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, email, password_hash, salt, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<CredentialRow>> {
        let credential = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, email, password_hash, salt, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    async fn create(&self, credential: NewCredential) -> DbResult<CredentialRow> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO users (id, email, password_hash, salt)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, salt, created_at
            "#,
        )
        .bind(credential.id)
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(&credential.salt)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
