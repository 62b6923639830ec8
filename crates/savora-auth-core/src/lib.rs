//! Savora Auth Core - credential verification and issuance
//!
//! Salted PBKDF2 password hashing, constant-time verification, and signed
//! bearer-token issuance over sanitized user claims.

pub mod config;
pub mod crypto;
pub mod error;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use crypto::{derive_hash, generate_salt, hashes_match, KdfParams, SALT_LENGTH};
pub use error::AuthError;
pub use service::{normalize_email, AuthService, AuthSession};
pub use token::{Claims, SigningKey, SigningKeyError, TokenIssuer, ISSUER};
