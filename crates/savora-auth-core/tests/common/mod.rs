//! Shared test fixtures
//!
//! In-memory credential store with the same unique-insert semantics as the
//! real store's unique index.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use savora_auth_core::{AuthConfig, KdfParams, SigningKey};
use savora_db::{CredentialRepository, CredentialRow, DbError, DbResult, NewCredential};
use uuid::Uuid;

pub const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Config with a fast KDF so tests don't burn CPU on 310k iterations
pub fn test_config() -> AuthConfig {
    AuthConfig::new(SigningKey::new(TEST_SECRET).unwrap()).with_kdf(KdfParams {
        iterations: 1_000,
        output_length: 16,
    })
}

/// In-memory credential repository
#[derive(Default)]
pub struct MemoryCredentialRepository {
    rows: Mutex<HashMap<Uuid, CredentialRow>>,
}

impl MemoryCredentialRepository {
    /// Number of stored credentials
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<CredentialRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|row| row.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<CredentialRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, credential: NewCredential) -> DbResult<CredentialRow> {
        // Check and insert under one lock, like the store's atomic
        // unique-index insert.
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|row| row.email == credential.email) {
            return Err(DbError::UniqueViolation);
        }

        let row = CredentialRow {
            id: credential.id,
            email: credential.email,
            password_hash: credential.password_hash,
            salt: credential.salt,
            created_at: Utc::now(),
        };
        rows.insert(row.id, row.clone());
        Ok(row)
    }
}

/// Repository whose reads never complete within any reasonable deadline
#[derive(Default)]
pub struct StalledRepository;

#[async_trait]
impl CredentialRepository for StalledRepository {
    async fn find_by_email(&self, _email: &str) -> DbResult<Option<CredentialRow>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn find_by_id(&self, _id: Uuid) -> DbResult<Option<CredentialRow>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn create(&self, _credential: NewCredential) -> DbResult<CredentialRow> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(DbError::NotFound)
    }
}
