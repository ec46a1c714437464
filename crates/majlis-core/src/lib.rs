//! Session logic and port trait definitions for Majlis.
//!
//! This crate defines the "ports" (the `HistoryStore` and `AssistantClient`
//! traits) that the infrastructure layer implements, and the `SessionStore`
//! that owns the conversation. It depends only on `majlis-types` -- never on
//! `majlis-infra` or any database/HTTP crate.

pub mod session;
