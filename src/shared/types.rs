use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimal response envelope shared by error responses and message-only
/// successes. The `status` field mirrors the HTTP status line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
    pub status: u16,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_message_and_status() {
        let value = serde_json::to_value(ApiMessage::new("Image not found", 404)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "message": "Image not found", "status": 404 })
        );
    }
}
