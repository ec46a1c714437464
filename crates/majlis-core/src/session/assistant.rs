//! AssistantClient trait definition.
//!
//! Port for the remote assistant. The HTTP implementation lives in
//! majlis-infra (`HttpAssistantClient`).

use majlis_types::chat::ChatMessage;
use majlis_types::error::AssistantError;

/// Port for requesting a reply from the remote assistant.
///
/// `conversation` carries the new message's predecessors only (system-role
/// messages already excluded by the caller); the new user message travels
/// separately. Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait AssistantClient: Send + Sync {
    /// Request one assistant reply for the given conversation state.
    fn reply(
        &self,
        conversation: &[ChatMessage],
        new_message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, AssistantError>> + Send;
}
