//! WebSocket transport over `tokio-tungstenite`.

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, tungstenite::Message};
use url::Url;

use super::transport::{Connection, Frame, Transport, TransportError};

/// Opens plain or TLS WebSocket connections, depending on the endpoint scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSocketTransport;

/// A live WebSocket connection.
pub struct WebSocketConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Transport for WebSocketTransport {
    type Connection = WebSocketConnection;

    async fn connect(&mut self, endpoint: &Url) -> Result<WebSocketConnection, TransportError> {
        let (stream, response) = tokio_tungstenite::connect_async(endpoint.as_str()).await?;
        log::debug!("Handshake with {endpoint} finished: {}", response.status());
        Ok(WebSocketConnection { stream })
    }
}

impl Connection for WebSocketConnection {
    async fn next_frame(&mut self) -> Option<Result<Frame, TransportError>> {
        loop {
            let message = match self.stream.next().await? {
                Ok(message) => message,
                Err(error) => return Some(Err(error.into())),
            };

            let frame = match message {
                Message::Text(text) => Frame::Text(String::from(&*text)),
                Message::Binary(data) => Frame::Binary(data.len()),
                Message::Close(close) => {
                    Frame::Closed(close.map(|close| format!("{} {}", close.code, &*close.reason)))
                }
                // control frames are answered by tungstenite itself
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
            };
            return Some(Ok(frame));
        }
    }

    async fn close(&mut self) {
        if let Err(error) = self.stream.close(None).await {
            log::debug!("Closing the websocket failed: {error}");
        }
    }
}
