//! Application context and request dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses back to the frontend bridge.

use std::sync::Arc;

use notibell_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::client::BridgeClosed;
use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and request handlers.
pub(crate) struct AppContext {
    /// Backend state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch requests from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            if let Err(error) = self.dispatch_message(message).await {
                log::info!("Stopping request loop: {error}");
                break;
            }
        }
    }

    /// Dispatches the received request from the frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) -> Result<(), BridgeClosed> {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await
            }
            MessageToBackend::ConnectionStateRequest => {
                services::connection_service::handle_connection_state_request(self.clone()).await
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) -> Result<(), BridgeClosed> {
        self.tx.send(message).await.map_err(|_| BridgeClosed)
    }
}
