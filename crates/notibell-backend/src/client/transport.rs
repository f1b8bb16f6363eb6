use std::future::Future;

use url::Url;

/// Errors raised by a transport while connecting or reading.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// WebSocket handshake or protocol failure.
    #[error("websocket error: {0}")]
    WebSocket(#[from] Box<tokio_tungstenite::tungstenite::Error>),
    /// Plain I/O failure underneath the connection, such as a refused
    /// connect.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for TransportError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        match error {
            tokio_tungstenite::tungstenite::Error::Io(error) => Self::Io(error),
            error => Self::WebSocket(Box::new(error)),
        }
    }
}

/// One unit received over an open connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A text frame, expected to carry a JSON envelope.
    Text(String),
    /// A binary frame of the given length. Not part of the protocol.
    Binary(usize),
    /// The peer closed the connection, with its reason if it sent one.
    Closed(Option<String>),
}

/// Something that can open push connections to an endpoint.
pub trait Transport: Send {
    type Connection: Connection;

    /// Opens a new connection to `endpoint`.
    fn connect(
        &mut self,
        endpoint: &Url,
    ) -> impl Future<Output = Result<Self::Connection, TransportError>> + Send;
}

/// An open push connection.
pub trait Connection: Send {
    /// Waits for the next frame. `None` means the stream ended.
    fn next_frame(&mut self) -> impl Future<Output = Option<Result<Frame, TransportError>>> + Send;

    /// Closes the connection from this side.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}
