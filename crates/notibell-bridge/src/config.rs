use serde::{Deserialize, Serialize};

/// Fixed path of the notification endpoint on the server.
pub const NOTIFICATIONS_PATH: &str = "/ws/notifications/";

/// Configuration of the push channel and its reconnection policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Address of the admin page. The endpoint mirrors its scheme (`http` ->
    /// `ws`, `https` -> `wss`) and host.
    pub page_url: String,
    /// Path of the notification endpoint.
    pub path: String,
    /// Delay between a closed connection and the next attempt, in
    /// milliseconds.
    pub reconnect_delay_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:8000/".to_owned(),
            path: NOTIFICATIONS_PATH.to_owned(),
            reconnect_delay_ms: 5_000,
        }
    }
}

/// Timing of the toast lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastConfig {
    /// How long a toast stays fully visible, in milliseconds.
    pub dwell_ms: u64,
    /// Duration of the entrance and exit transitions, in milliseconds.
    pub transition_ms: u64,
    /// Length of one animation frame, in milliseconds.
    pub frame_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 5_000,
            transition_ms: 300,
            frame_ms: 16,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configuration of the push channel.
    pub channel: ChannelConfig,
    /// Configuration of the toast presenter.
    pub toast: ToastConfig,
}
