//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, the notification channel
//! client, and the loop that answers frontend bridge requests.

use std::{future::Future, sync::Arc, thread};

use notibell_bridge::{
    MessageFromBackend, MessageToBackend, config::Config, connection::ConnectionState,
};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
    watch,
};

use crate::app::AppContext;
use crate::client::{
    ChannelClient, endpoint::derive_endpoint, policy::FixedDelay, websocket::WebSocketTransport,
};
use crate::config::ConfigError;
use crate::state::State;

/// Initialize backend state, start the channel client if requested, and
/// process frontend requests.
///
/// A configuration error ends the backend before anything else starts; the
/// bridge sender is dropped with it, which stops the frontend.
async fn setup_backend(
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    start_client: bool,
    config: impl Future<Output = Result<Config, ConfigError>>,
) -> Result<(), ConfigError> {
    let config = config.await?;

    let client = if start_client {
        match derive_endpoint(&config.channel.page_url, &config.channel.path) {
            Ok(endpoint) => Some(ChannelClient::new(
                endpoint,
                WebSocketTransport,
                FixedDelay::from_millis(config.channel.reconnect_delay_ms),
                tx.clone(),
            )),
            Err(error) => {
                log::error!("Notification channel disabled: {error}");
                None
            }
        }
    } else {
        log::info!("Page has no notification bell, channel client not started");
        None
    };

    let connection = match &client {
        Some(client) => client.state(),
        None => watch::channel(ConnectionState::Disconnected).1,
    };

    let state = Arc::new(RwLock::new(State { config, connection }));
    let context = Arc::new(AppContext { state, tx });

    match client {
        Some(client) => {
            tokio::join!(context.consume_bridge_messages(rx), client.run());
        }
        None => context.consume_bridge_messages(rx).await,
    }
    Ok(())
}

/// Spawn the backend runtime and begin processing bridge messages.
///
/// The channel client is only started when `start_client` is set, which the
/// caller derives from the page exposing a notification bell.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>, start_client: bool) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                log::error!("Failed to build backend runtime: {error}");
                return;
            }
        };
        let config = crate::config::load_config();
        if let Err(error) = runtime.block_on(setup_backend(rx, tx, start_client, config)) {
            log::error!("Failed to load config: {error}");
        }
    });
}
