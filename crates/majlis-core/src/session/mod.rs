//! Conversation session abstractions for Majlis.
//!
//! `SessionStore` is the single source of truth for the current
//! conversation; `HistoryStore` and `AssistantClient` are the ports the
//! infrastructure layer implements for durable snapshots and the remote
//! assistant.

pub mod assistant;
pub mod history;
pub mod store;

pub use assistant::AssistantClient;
pub use history::HistoryStore;
pub use store::SessionStore;
