//! Chat message types for Majlis.
//!
//! A conversation is an ordered sequence of [`ChatMessage`]s. Messages are
//! never mutated after creation -- the session store only appends, prepends
//! (system welcome), or replaces the whole sequence on clear.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in the conversation.
///
/// The `timestamp` is assigned by the session store at creation time, never
/// by the caller. Field names (`role`, `content`, `timestamp`) are preserved
/// verbatim on the wire and in the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Construct a message with the current time as its timestamp.
    pub fn now(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether the content is empty after trimming.
    ///
    /// Such messages are never rendered or transmitted, though they may
    /// transiently exist in a persisted snapshot.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Assistant;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_chat_message_field_names() {
        let msg = ChatMessage::now(MessageRole::User, "hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"hello\""));
        assert!(json.contains("\"timestamp\":"));
    }

    #[test]
    fn test_sequence_roundtrip() {
        let seq = vec![
            ChatMessage::now(MessageRole::System, "welcome"),
            ChatMessage::now(MessageRole::User, "hi"),
            ChatMessage::now(MessageRole::Assistant, "hello there"),
        ];
        let json = serde_json::to_string(&seq).unwrap();
        let parsed: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, parsed);
    }

    #[test]
    fn test_empty_sequence_roundtrip() {
        let seq: Vec<ChatMessage> = Vec::new();
        let json = serde_json::to_string(&seq).unwrap();
        let parsed: Vec<ChatMessage> = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_is_blank() {
        assert!(ChatMessage::now(MessageRole::User, "").is_blank());
        assert!(ChatMessage::now(MessageRole::User, "  \t\n ").is_blank());
        assert!(!ChatMessage::now(MessageRole::User, " x ").is_blank());
    }
}
