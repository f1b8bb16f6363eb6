use notibell_bridge::notification::{Envelope, EventKind, NotificationEvent, WirePayload};

/// Errors for frames that cannot be turned into an event. The frame is
/// dropped; the connection stays open.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame is not JSON, or lacks the `type` tag.
    #[error("frame is not a valid envelope: {0}")]
    InvalidEnvelope(#[from] serde_json::Error),
    /// A notification frame without a `message` object.
    #[error("notification frame has no message body")]
    MissingBody,
    /// A notification body that does not match the expected shape.
    #[error("notification body is malformed: {0}")]
    InvalidBody(serde_json::Error),
    /// A notification with no text to show.
    #[error("notification has an empty message")]
    EmptyMessage,
}

/// Result of parsing one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A validated `send_notification` event.
    Notification(NotificationEvent),
    /// A well-formed frame of a kind this client does not act on.
    Ignored(String),
}

/// Parses a text frame received over the push channel.
pub fn parse_frame(text: &str) -> Result<InboundEvent, FrameError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match EventKind::from_tag(&envelope.tag) {
        EventKind::NewNotification => {
            let body = envelope.message.ok_or(FrameError::MissingBody)?;
            let payload: WirePayload =
                serde_json::from_value(body).map_err(FrameError::InvalidBody)?;
            let message = payload
                .mensaje
                .filter(|message| !message.trim().is_empty())
                .ok_or(FrameError::EmptyMessage)?;

            Ok(InboundEvent::Notification(NotificationEvent {
                id: payload.id,
                message,
                url: payload.url.unwrap_or_else(|| "#".to_owned()),
                read: payload.leido.unwrap_or(false),
                created_at: payload.fecha_creacion,
            }))
        }
        EventKind::Other(tag) => Ok(InboundEvent::Ignored(tag)),
    }
}
