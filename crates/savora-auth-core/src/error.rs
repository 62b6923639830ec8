//! Auth errors

use savora_db::DbError;
use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup email already registered
    #[error("user already exists")]
    AlreadyExists,

    /// Login failure: unknown email and wrong password are deliberately
    /// indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Request failed validation
    #[error("{0}")]
    Validation(String),

    /// Key derivation failed
    #[error("password hashing failed")]
    HashingFailure,

    /// Store unreachable or deadline exceeded
    #[error("store unavailable")]
    StoreUnavailable,

    /// Invalid token (malformed, bad signature)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AlreadyExists => 409,
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::StoreUnavailable => 503,
            Self::HashingFailure | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION",
            Self::HashingFailure => "HASHING_FAILURE",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            // The unique index is the source of truth for duplicate emails.
            DbError::UniqueViolation => Self::AlreadyExists,
            other => {
                tracing::error!("Store error: {}", other);
                Self::StoreUnavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_a_client_error() {
        assert_eq!(AuthError::AlreadyExists.status_code(), 409);
    }

    #[test]
    fn test_unique_violation_maps_to_already_exists() {
        let err = AuthError::from(DbError::UniqueViolation);
        assert!(matches!(err, AuthError::AlreadyExists));
    }

    #[test]
    fn test_store_errors_map_to_unavailable() {
        let err = AuthError::from(DbError::NotFound);
        assert!(matches!(err, AuthError::StoreUnavailable));
    }
}
