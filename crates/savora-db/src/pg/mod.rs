//! PostgreSQL repository implementations

mod credential;

pub use credential::PgCredentialRepository;
