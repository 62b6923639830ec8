//! Authentication handlers (signup, login)

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use savora_types::{Envelope, PublicUser};

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

// Keep submitted passwords out of debug/trace output.
impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
pub struct AuthBody {
    pub text: &'static str,
    pub token: String,
    pub user: PublicUser,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/signup
///
/// Create a credential and return a bearer token with the sanitized user.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<Envelope<AuthBody>>> {
    let session = state.auth.signup(&req.email, &req.password).await?;

    tracing::debug!(user_id = %session.user.id, "Signup completed");

    Ok(Json(Envelope::success(AuthBody {
        text: "User registered correctly!",
        token: session.token,
        user: session.user,
    })))
}

/// POST /auth/login
///
/// Verify a credential and return a bearer token with the sanitized user.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<Envelope<AuthBody>>> {
    let session = state.auth.login(&req.email, &req.password).await?;

    tracing::debug!(user_id = %session.user.id, "Login completed");

    Ok(Json(Envelope::success(AuthBody {
        text: "Login successful!",
        token: session.token,
        user: session.user,
    })))
}
