// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::characters::CharacterRoster;
use crate::config::TimecallConfig;

/// Shared application state.
///
/// Everything in here is read-only after startup, so handlers clone it
/// freely and requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, loaded once in main
    pub config: Arc<TimecallConfig>,

    /// Character roster, fixed at startup
    pub roster: Arc<CharacterRoster>,

    /// Shared HTTP client for outbound Gemini calls
    pub http: reqwest::Client,
}

impl AppState {
    /// Create new application state
    pub fn new(config: TimecallConfig, roster: CharacterRoster, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            roster: Arc::new(roster),
            http,
        }
    }
}
