//! Configuration types for the auth core

use std::time::Duration;

use crate::crypto::KdfParams;
use crate::token::SigningKey;

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer-token signing key (operator-supplied, never defaulted)
    pub signing_key: SigningKey,
    /// Issued-token lifetime
    pub token_ttl: Duration,
    /// PBKDF2 parameters shared by the signup and login derivations
    pub kdf: KdfParams,
    /// Per-call deadline for store operations
    pub store_timeout: Duration,
}

impl AuthConfig {
    /// Create a new auth config with default durations and KDF parameters
    pub fn new(signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            token_ttl: Duration::from_secs(24 * 60 * 60), // 24 hours
            kdf: KdfParams::default(),
            store_timeout: Duration::from_secs(5),
        }
    }

    /// Set token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Set KDF parameters
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    /// Set the store-call deadline
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}
