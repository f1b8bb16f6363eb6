//! Notification channel client.
//!
//! The client owns one push connection at a time and supervises it:
//! frames are parsed and validated notifications are forwarded to the
//! frontend, while every close (graceful, refused, or failed) is followed by
//! exactly one reconnection attempt after the delay chosen by the
//! [`ReconnectPolicy`]. Retries are unbounded; the loop only ends when the
//! frontend side of the bridge goes away.

pub mod endpoint;
pub mod frame;
pub mod policy;
pub mod transport;
pub mod websocket;

use notibell_bridge::{MessageFromBackend, connection::ConnectionState};
use tokio::sync::{mpsc::Sender, watch};
use url::Url;

use self::frame::{InboundEvent, parse_frame};
use self::policy::ReconnectPolicy;
use self::transport::{Connection, Frame, Transport};

/// The frontend dropped its receiver; nothing is left to deliver to.
#[derive(Debug, thiserror::Error)]
#[error("frontend bridge is closed")]
pub struct BridgeClosed;

/// Client for the notification push channel.
pub struct ChannelClient<T, P> {
    endpoint: Url,
    transport: T,
    policy: P,
    events: Sender<MessageFromBackend>,
    state: watch::Sender<ConnectionState>,
    attempt: u32,
}

impl<T, P> ChannelClient<T, P>
where
    T: Transport,
    P: ReconnectPolicy,
{
    /// Creates a client for `endpoint` that forwards events into `events`.
    pub fn new(endpoint: Url, transport: T, policy: P, events: Sender<MessageFromBackend>) -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            endpoint,
            transport,
            policy,
            events,
            state,
            attempt: 0,
        }
    }

    /// Returns a receiver that always holds the current connection state.
    pub fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Connects and keeps reconnecting until the frontend is gone.
    ///
    /// Consuming `self` makes a second concurrent start impossible.
    pub async fn run(mut self) {
        if let Err(error) = self.supervise().await {
            log::info!("Stopping notification channel: {error}");
        }
    }

    async fn supervise(&mut self) -> Result<(), BridgeClosed> {
        loop {
            self.transition(ConnectionState::Connecting).await?;
            log::info!("Connecting to {}", self.endpoint);

            match self.transport.connect(&self.endpoint).await {
                Ok(connection) => {
                    self.transition(ConnectionState::Open).await?;
                    log::info!("Notification channel open");
                    self.attempt = 0;
                    self.pump(connection).await?;
                }
                Err(error) => log::warn!("Failed to connect to {}: {error}", self.endpoint),
            }

            self.transition(ConnectionState::ClosedPendingRetry).await?;
            self.attempt = self.attempt.saturating_add(1);
            let delay = self.policy.next_delay(self.attempt);
            log::info!("Reconnecting in {delay:?} (attempt {})", self.attempt);
            tokio::time::sleep(delay).await;
        }
    }

    /// Reads frames until the connection ends. Transport errors close the
    /// connection and end the session the same way a remote close does.
    async fn pump<C: Connection>(&mut self, mut connection: C) -> Result<(), BridgeClosed> {
        loop {
            match connection.next_frame().await {
                Some(Ok(Frame::Text(text))) => self.handle_text(&text).await?,
                Some(Ok(Frame::Binary(len))) => {
                    log::warn!("Dropping unexpected binary frame of {len} bytes");
                }
                Some(Ok(Frame::Closed(reason))) => {
                    log::warn!(
                        "Notification channel closed by server: {}",
                        reason.as_deref().unwrap_or("no reason")
                    );
                    return Ok(());
                }
                Some(Err(error)) => {
                    log::error!("Notification channel error: {error}");
                    connection.close().await;
                    return Ok(());
                }
                None => {
                    log::warn!("Notification channel closed");
                    return Ok(());
                }
            }
        }
    }

    async fn handle_text(&mut self, text: &str) -> Result<(), BridgeClosed> {
        match parse_frame(text) {
            Ok(InboundEvent::Notification(event)) => {
                log::debug!("New notification {:?}: {}", event.id, event.message);
                self.send(MessageFromBackend::NotificationReceived(event))
                    .await
            }
            Ok(InboundEvent::Ignored(tag)) => {
                log::debug!("Ignoring frame of type `{tag}`");
                Ok(())
            }
            Err(error) => {
                log::warn!("Dropping malformed frame: {error}");
                Ok(())
            }
        }
    }

    async fn transition(&mut self, next: ConnectionState) -> Result<(), BridgeClosed> {
        let current = *self.state.borrow();
        if !current.can_transition_to(next) {
            log::error!("Unexpected connection transition {current} -> {next}");
        }
        self.state.send_replace(next);
        self.send(MessageFromBackend::ConnectionStateChanged(next))
            .await
    }

    async fn send(&self, message: MessageFromBackend) -> Result<(), BridgeClosed> {
        self.events.send(message).await.map_err(|_| BridgeClosed)
    }
}
