//! Error types for the Auth API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use savora_auth_core::AuthError;
use savora_types::{Envelope, MessageBody};

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    #[allow(dead_code)] // Reserved for request-shape failures
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Client-visible text; internals were already logged at the boundary
    fn message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Auth(err) => match err {
                AuthError::AlreadyExists => "User already exists!".to_string(),
                AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
                AuthError::Validation(msg) => msg.clone(),
                AuthError::StoreUnavailable => "Service temporarily unavailable.".to_string(),
                _ => "Internal server error.".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors
        if status.is_server_error() {
            tracing::error!(error = ?self, "Internal API error");
        }

        let body = Envelope::failure(status.as_u16(), MessageBody::new(self.message()));
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_409() {
        let err = ApiError::from(AuthError::AlreadyExists);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "User already exists!");
    }

    #[test]
    fn test_login_failures_share_one_message() {
        // Unknown email and wrong password both arrive as the same variant;
        // the response text cannot distinguish them.
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Invalid email or password.");
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let err = ApiError::from(AuthError::StoreUnavailable);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(AuthError::Internal("pool exhausted".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("pool"));
    }
}
