//! Auth service - signup and login orchestration

use std::future::Future;
use std::sync::Arc;

use savora_db::{CredentialRepository, CredentialRow, DbResult, NewCredential};
use savora_types::PublicUser;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::crypto;
use crate::token::TokenIssuer;
use crate::AuthError;

/// Minimum accepted password length at signup
const MIN_PASSWORD_LENGTH: usize = 8;

/// Outcome of a successful signup or login
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Signed bearer token over the sanitized user claims
    pub token: String,
    /// User representation with secret fields stripped
    pub user: PublicUser,
}

/// Authentication service
///
/// Orchestrates credential creation and verification against a
/// `CredentialRepository`, and issues bearer tokens from one shared path
/// for both success flows.
pub struct AuthService<R: CredentialRepository> {
    config: AuthConfig,
    issuer: TokenIssuer,
    repo: Arc<R>,
}

impl<R: CredentialRepository> AuthService<R> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, repo: Arc<R>) -> Self {
        let issuer = TokenIssuer::new(config.signing_key.clone(), config.token_ttl);
        Self {
            config,
            issuer,
            repo,
        }
    }

    /// Register a new credential and issue a token for it.
    ///
    /// The store's unique index decides duplicates under concurrent
    /// signups; the pre-check only short-circuits the common case before
    /// the expensive derivation.
    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = normalize_email(email);
        validate_email(&email)?;
        validate_password(password)?;

        if self
            .bounded(self.repo.find_by_email(&email))
            .await?
            .is_some()
        {
            return Err(AuthError::AlreadyExists);
        }

        let salt = crypto::generate_salt();
        let password_hash = self.derive(password.to_string(), salt.to_vec()).await?;

        let id = Uuid::new_v4();
        self.bounded(self.repo.create(NewCredential {
            id,
            email,
            password_hash,
            salt: salt.to_vec(),
        }))
        .await?;

        // Read back the store-canonical record for the response and claims.
        let stored = self
            .bounded(self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| AuthError::Internal("credential missing after insert".to_string()))?;

        self.session_for(&stored)
    }

    /// Verify a submitted password and issue a token on success.
    ///
    /// Unknown email, wrong password, and derivation failure all surface
    /// as `InvalidCredentials`; nothing in the result reveals which one
    /// occurred.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = normalize_email(email);

        let stored = self
            .bounded(self.repo.find_by_email(&email))
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = self
            .derive(password.to_string(), stored.salt.clone())
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !crypto::hashes_match(&candidate, &stored.password_hash) {
            tracing::debug!("Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.session_for(&stored)
    }

    /// Token issuer, for callers that need to verify issued tokens
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    /// Run the KDF off the async executor.
    async fn derive(&self, password: String, salt: Vec<u8>) -> Result<Vec<u8>, AuthError> {
        let params = self.config.kdf;
        tokio::task::spawn_blocking(move || crypto::derive_hash(&password, &salt, params))
            .await
            .map_err(|e| {
                tracing::error!("KDF task failed: {}", e);
                AuthError::HashingFailure
            })
    }

    /// Bound a store call with the configured deadline.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = DbResult<T>>,
    ) -> Result<T, AuthError> {
        match timeout(self.config.store_timeout, call).await {
            Ok(result) => result.map_err(AuthError::from),
            Err(_) => {
                tracing::error!(
                    "Store call exceeded {:?} deadline",
                    self.config.store_timeout
                );
                Err(AuthError::StoreUnavailable)
            }
        }
    }

    /// Shared issuance path for both success flows.
    fn session_for(&self, stored: &CredentialRow) -> Result<AuthSession, AuthError> {
        let user = stored.sanitized();
        let token = self.issuer.issue(&user)?;
        Ok(AuthSession { token, user })
    }
}

impl<R: CredentialRepository> std::fmt::Debug for AuthService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Normalize an email for storage and lookup: trim and lowercase.
///
/// The store only ever sees normalized addresses, so the unique index
/// treats `User@Example.com` and `user@example.com` as the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Syntactic plausibility check; full RFC parsing is not the goal here.
fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::Validation("email is not a valid address".to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_validate_email_accepts_plausible_addresses() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@x.com",
            "a@",
            "a@nodot",
            "a@.com",
            "a@x.com.",
            "a@b@c.com",
        ] {
            assert!(validate_email(email).is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_validate_password_minimum_length() {
        assert!(validate_password("Secret12").is_ok());
        assert!(matches!(
            validate_password("short"),
            Err(AuthError::Validation(_))
        ));
    }
}
