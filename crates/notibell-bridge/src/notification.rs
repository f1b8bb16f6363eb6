use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Wire value of the `type` field for a new notification.
pub const SEND_NOTIFICATION: &str = "send_notification";

/// Kind of an inbound event, taken from the `type` field of the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A new notification for the current user.
    NewNotification,
    /// Any other tag. Kept so that newer server events are ignored, not
    /// rejected.
    Other(String),
}

impl EventKind {
    /// Classifies a raw `type` tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            SEND_NOTIFICATION => EventKind::NewNotification,
            other => EventKind::Other(other.to_owned()),
        }
    }
}

/// Outer JSON object of every frame pushed over the channel.
///
/// The `message` field is kept as raw JSON until the tag is known, so that
/// unknown event kinds with differently shaped bodies still deserialize.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

/// Body of a `send_notification` frame, with the field names the server
/// uses.
///
/// Every field is optional and a value of the wrong type reads as absent, so
/// a change in one metadata field does not cost the whole notification.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WirePayload {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub mensaje: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub leido: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub fecha_creacion: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A validated notification, ready to be shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Server-side identifier, if the server sent one.
    pub id: Option<u64>,
    /// Text shown to the user. Never empty.
    pub message: String,
    /// Target link of the notification entry.
    pub url: String,
    /// Whether the server already marked it as read.
    pub read: bool,
    /// Server creation timestamp as sent. Informational only; the page orders
    /// entries by arrival.
    pub created_at: Option<String>,
}

impl NotificationEvent {
    /// Creates an unread notification with no server metadata.
    pub fn new(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            url: url.into(),
            read: false,
            created_at: None,
        }
    }
}
