//! Client Configuration

/// Default game server URL
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// Default round length in seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 30;

/// Game client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the game server
    pub server: String,
    /// Countdown length of one round
    pub round_seconds: u32,
    /// Drop responses to requests issued in an earlier round
    ///
    /// Off by default: a response arriving after the timer expired or the
    /// game was restarted still applies its effects.
    pub discard_stale_responses: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            round_seconds: DEFAULT_ROUND_SECONDS,
            discard_stale_responses: false,
        }
    }
}
