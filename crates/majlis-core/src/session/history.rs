//! HistoryStore trait definition.
//!
//! Durable snapshot persistence for the conversation. Implementations live
//! in majlis-infra (e.g., `SqliteHistoryStore`).

use majlis_types::chat::ChatMessage;
use majlis_types::error::HistoryError;

/// Port for durable conversation snapshots.
///
/// Every write is a full-sequence overwrite: the stored value is always a
/// complete snapshot of the in-memory conversation, never an append-only
/// log. Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait HistoryStore: Send + Sync {
    /// Load the last persisted snapshot.
    ///
    /// Returns an empty sequence if nothing was ever written.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, HistoryError>> + Send;

    /// Overwrite the snapshot with the full current sequence.
    fn save(
        &self,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;
}
