//! Wire types for the remote assistant API.
//!
//! The assistant endpoint accepts the prior conversation and the new user
//! message as separate fields, and returns a single assistant reply with a
//! protocol-level status.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::chat::ChatMessage;

/// Request body for the assistant endpoint.
///
/// `conversation` carries the new message's predecessors only, with
/// system-role messages excluded; the new message itself travels separately
/// in `new_message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub conversation: Vec<ChatMessage>,
    pub new_message: ChatMessage,
}

/// Protocol-level status of an assistant response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Ok => write!(f, "ok"),
            ResponseStatus::Error => write!(f, "error"),
        }
    }
}

/// Response body from the assistant endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub assistant_message: ChatMessage,
    pub status: ResponseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;

    #[test]
    fn test_request_field_names() {
        let req = ChatRequest {
            conversation: vec![ChatMessage::now(MessageRole::User, "earlier")],
            new_message: ChatMessage::now(MessageRole::User, "now"),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"conversation\":["));
        assert!(json.contains("\"new_message\":{"));
    }

    #[test]
    fn test_response_status_serde() {
        let json = serde_json::to_string(&ResponseStatus::Ok).unwrap();
        assert_eq!(json, "\"ok\"");
        let parsed: ResponseStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, ResponseStatus::Error);
    }

    #[test]
    fn test_response_parse() {
        let json = r#"{
            "assistant_message": {
                "role": "assistant",
                "content": "Happy National Day!",
                "timestamp": "2025-09-23T12:00:00Z"
            },
            "status": "ok"
        }"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, ResponseStatus::Ok);
        assert_eq!(resp.assistant_message.role, MessageRole::Assistant);
        assert_eq!(resp.assistant_message.content, "Happy National Day!");
    }
}
