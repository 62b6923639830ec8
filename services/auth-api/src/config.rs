//! Configuration for the Auth API service.

use std::time::Duration;

use savora_auth_core::{AuthConfig, KdfParams, SigningKey};

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Whole-request deadline
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Database
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token signing secret; required, no default in any environment
        let token_secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;

        let signing_key = SigningKey::new(token_secret.as_bytes())
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?;

        // Token lifetime (default 24 hours)
        let token_ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_HOURS"))?;

        // Store-call deadline (default 5 seconds)
        let store_timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("STORE_TIMEOUT_SECS"))?;

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        // KDF iteration count; signup and login always share this value
        let kdf_iterations: u32 = std::env::var("KDF_ITERATIONS")
            .unwrap_or_else(|_| "310000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("KDF_ITERATIONS"))?;

        let auth = AuthConfig::new(signing_key)
            .with_token_ttl(Duration::from_secs(token_ttl_hours * 3600))
            .with_store_timeout(Duration::from_secs(store_timeout_secs))
            .with_kdf(KdfParams {
                iterations: kdf_iterations,
                ..KdfParams::default()
            });

        Ok(Self {
            http_port,
            database_url,
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
