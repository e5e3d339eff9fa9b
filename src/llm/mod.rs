// src/llm/mod.rs
// LLM client layer and the shared HTTP client it rides on.

pub mod gemini;

pub use gemini::GeminiClient;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default connect timeout for the shared client
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// One message in a conversation, tagged with a role.
///
/// `role` stays a free-form string: `user` and `assistant` are the
/// recognized values, and anything else is treated as user input when the
/// request is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Create the shared HTTP client with appropriate defaults.
///
/// This client should be created once at startup and passed to all
/// modules that need HTTP access. Uses connection pooling internally.
/// Per-request timeouts are set at the call site.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
