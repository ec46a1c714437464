//! The conversation session store.
//!
//! `SessionStore` owns the ordered message sequence, hydrates it from the
//! history backend at construction, re-persists a full snapshot after every
//! mutation, and reconciles optimistic sends with the remote assistant's
//! outcome. There is exactly one store per running client; it is constructed
//! explicitly at startup and shared via `Arc` -- no hidden global.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use majlis_types::chat::{ChatMessage, MessageRole};
use majlis_types::error::SendError;
use tracing::{debug, warn};

use super::assistant::AssistantClient;
use super::history::HistoryStore;

/// Single source of truth for the current conversation.
///
/// Mediates between in-memory state, the durable snapshot backend, and the
/// remote assistant. All methods take `&self`; the store is `Send + Sync`.
///
/// Readers observe the in-memory sequence, which equals the last persisted
/// snapshot except during the window of an in-flight send, when the
/// optimistically appended user message is already visible. At most one
/// send is in flight at a time: the store owns a busy flag and rejects
/// overlapping sends with [`SendError::Busy`], so the guarantee holds
/// regardless of UI wiring.
pub struct SessionStore<H: HistoryStore, A: AssistantClient> {
    history: H,
    assistant: A,
    messages: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicBool,
}

/// The optimistically appended user message of an in-flight send.
///
/// Makes the pending -> committed | rolled-back transition explicit: a send
/// either commits the pending message (drops the guard) or applies the
/// compensating removal restoring the exact pre-send sequence.
struct PendingSend {
    message: ChatMessage,
}

impl PendingSend {
    fn commit(self) {}

    /// Remove the pending message from the sequence.
    ///
    /// Removal is by message identity (role, content, timestamp), scanning
    /// from the back, so a system message prepended or a clear() issued
    /// while the send was in flight cannot make it remove the wrong entry.
    fn roll_back(self, messages: &mut Vec<ChatMessage>) {
        if let Some(idx) = messages.iter().rposition(|m| *m == self.message) {
            messages.remove(idx);
        }
    }
}

/// Clears the store's busy flag when the send completes, on every path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<H: HistoryStore, A: AssistantClient> SessionStore<H, A> {
    /// Construct the session store, hydrating from the history backend.
    ///
    /// A load failure is logged and treated as an empty conversation; the
    /// store then runs memory-only until a later write succeeds.
    pub async fn new(history: H, assistant: A) -> Self {
        let messages = match history.load().await {
            Ok(messages) => messages,
            Err(err) => {
                warn!(error = %err, "failed to load conversation history, starting empty");
                Vec::new()
            }
        };

        Self {
            history,
            assistant,
            messages: Mutex::new(messages),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The current conversation, with whitespace-only entries filtered out.
    ///
    /// Pure read of in-memory state -- no reload, no side effect.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock()
            .iter()
            .filter(|m| !m.is_blank())
            .cloned()
            .collect()
    }

    /// Prepend a system message (e.g., the welcome banner) and persist.
    ///
    /// System messages always become the new first element, never an append.
    pub async fn add_system_message(&self, content: &str) {
        let message = ChatMessage::now(MessageRole::System, content);
        self.lock().insert(0, message);
        self.persist().await;
    }

    /// Empty the conversation and persist the empty snapshot.
    pub async fn clear(&self) {
        self.lock().clear();
        self.persist().await;
    }

    /// Send a user message to the remote assistant.
    ///
    /// The user message is appended optimistically (visible to concurrent
    /// readers immediately) and persisted before the remote call. On a
    /// usable reply the assistant message is appended and persisted. On a
    /// transport or protocol failure the pending user message is rolled
    /// back. A reply that succeeds at the protocol level but carries no
    /// usable content keeps the user message and reports
    /// [`SendError::EmptyReply`] -- the one failure that does not roll back.
    pub async fn send(&self, content: &str) -> Result<(), SendError> {
        if content.trim().is_empty() {
            return Err(SendError::Empty);
        }

        let _guard = self.acquire_in_flight().ok_or(SendError::Busy)?;

        let user_message = ChatMessage::now(MessageRole::User, content);
        let pending = PendingSend {
            message: user_message.clone(),
        };

        // Conversation for the request: the new message's predecessors only,
        // with system-role and blank entries excluded. Captured before the
        // optimistic append so the new message is never duplicated into it.
        let conversation = {
            let mut messages = self.lock();
            let conversation: Vec<ChatMessage> = messages
                .iter()
                .filter(|m| m.role != MessageRole::System && !m.is_blank())
                .cloned()
                .collect();
            messages.push(user_message.clone());
            conversation
        };
        self.persist().await;

        match self.assistant.reply(&conversation, &user_message).await {
            Ok(reply) if !reply.is_blank() => {
                self.lock().push(reply);
                pending.commit();
                self.persist().await;
                debug!("send committed");
                Ok(())
            }
            Ok(_) => {
                // The user message is already committed; only the missing
                // assistant reply is reported as an error.
                pending.commit();
                warn!("assistant returned an empty reply");
                Err(SendError::EmptyReply)
            }
            Err(err) => {
                {
                    let mut messages = self.lock();
                    pending.roll_back(&mut messages);
                }
                self.persist().await;
                warn!(error = %err, "send failed, rolled back optimistic user message");
                Err(SendError::Transport(err.to_string()))
            }
        }
    }

    /// Try to claim the busy flag for the duration of a send.
    fn acquire_in_flight(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }

    /// Persist the full current sequence as a durable snapshot.
    ///
    /// Write failures are logged and swallowed: the in-memory sequence stays
    /// authoritative for the rest of the session.
    async fn persist(&self) {
        let snapshot = self.lock().clone();
        if let Err(err) = self.history.save(&snapshot).await {
            warn!(error = %err, "failed to persist conversation snapshot, continuing in memory");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ChatMessage>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}
