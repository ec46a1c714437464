//! Infrastructure layer for Majlis.
//!
//! Contains implementations of the port traits defined in `majlis-core`:
//! SQLite snapshot storage and the reqwest-based assistant HTTP client,
//! plus the TOML config loader.

pub mod config;
pub mod http;
pub mod sqlite;
