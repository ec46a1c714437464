//! Shared domain types for Majlis.
//!
//! This crate contains the types used across the Majlis client:
//! chat messages, the assistant wire protocol, configuration, and the
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
