//! HTTP handlers

mod auth;
mod health;

pub use auth::{login, signup};
pub use health::{health, ready};

use axum::Json;
use savora_types::{Envelope, MessageBody};

/// GET / - Welcome
pub async fn welcome() -> Json<Envelope<MessageBody>> {
    Json(Envelope::success(MessageBody::new("Welcome to Savora!")))
}
