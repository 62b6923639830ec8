//! Database errors

use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Unique-index violation (duplicate key)
    #[error("duplicate key")]
    UniqueViolation,

    /// Record not found
    #[error("record not found")]
    NotFound,

    /// Any other SQLx error
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

/// Result alias for store operations
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        // The unique index on email is the sole source of truth for
        // duplicates; surface its violation as a distinct variant.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation;
            }
        }
        Self::Sqlx(err)
    }
}
