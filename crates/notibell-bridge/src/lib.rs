//! Communication bridge between the notification client and the page.
//!
//! This crate defines the types and protocols used to connect the page model
//! (badge, notification list, toasts) with the asynchronous backend that owns
//! the push connection to the notification server.
//!
//! The design is deliberately lightweight:
//! - The frontend sends requests (e.g., request config).
//! - The backend pushes events (e.g., a new notification arrived, the
//!   connection state changed).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod connection;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageFromBackend {
    /// A `send_notification` frame was received and validated.
    NotificationReceived(notification::NotificationEvent),
    /// The push connection moved to another lifecycle state.
    ConnectionStateChanged(connection::ConnectionState),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
}

/// Requests issued by the frontend to query the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the current connection state.
    ConnectionStateRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send requests to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get requests from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
