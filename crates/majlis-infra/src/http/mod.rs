//! HTTP layer.
//!
//! The reqwest-based client for the remote assistant endpoint.

pub mod assistant;
