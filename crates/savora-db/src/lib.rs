//! Savora DB - Credential store accessor
//!
//! SQLx-based persistence layer for user credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use savora_db::{create_pool, PgCredentialRepository, CredentialRepository};
//!
//! let pool = create_pool("postgres://localhost/savora").await?;
//! let repo = PgCredentialRepository::new(pool);
//!
//! let credential = repo.find_by_email("user@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::CredentialRow;
pub use pg::PgCredentialRepository;
pub use pool::{create_pool, create_pool_with_options, run_migrations, DbPool, PoolOptions};
pub use repo::{CredentialRepository, NewCredential};
