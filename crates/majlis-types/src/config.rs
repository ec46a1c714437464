//! Global configuration types for Majlis.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls
//! where the remote assistant lives and how long the transport waits.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Majlis client.
///
/// Loaded from `~/.majlis/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Full URL of the remote assistant chat endpoint.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Transport-level request timeout in seconds.
    ///
    /// The session store itself imposes no timeout; this is the HTTP
    /// client's own limit.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_endpoint() -> String {
    "http://127.0.0.1:8000/api/chat".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
