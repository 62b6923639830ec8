//! API request/response types

use serde::{Deserialize, Serialize};

/// Standard API response envelope.
///
/// Every endpoint responds with this shape; `status_code` mirrors the HTTP
/// status so callers never have to rely on the transport status alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// HTTP-equivalent status code
    pub status_code: u16,
    /// Response payload
    pub body: T,
}

impl<T> Envelope<T> {
    /// Create a successful response
    pub fn success(body: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            body,
        }
    }

    /// Create a failed response with the given status code
    pub fn failure(status_code: u16, body: T) -> Self {
        Self {
            success: false,
            status_code,
            body,
        }
    }
}

/// Plain-text message payload, used by welcome and error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable message
    pub text: String,
}

impl MessageBody {
    /// Create a message body
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::success(MessageBody::new("ok"));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"]["text"], "ok");
    }

    #[test]
    fn test_failure_envelope_keeps_shape() {
        let envelope = Envelope::failure(409, MessageBody::new("User already exists!"));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["statusCode"], 409);
        assert_eq!(value["body"]["text"], "User already exists!");
    }
}
