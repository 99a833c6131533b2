use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Webhook request body: a batch of chat events.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A single inbound chat event.
///
/// The same JSON shape travels over the webhook and, base64-wrapped,
/// through the internal task envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// One-shot token for replying to this event
    pub reply_token: String,

    pub message: EventMessage,
}

/// Closed set of message kinds the relay understands.
///
/// Unknown `type` tags fall into `Other`, so a platform adding new message
/// kinds degrades to the fixed unsupported-type reply instead of a parse
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventMessage {
    Text {
        text: String,
    },
    Image {
        /// Platform message ID, used to fetch the attachment bytes and to
        /// derive the storage keys
        id: String,
    },
    #[serde(other)]
    Other,
}

/// Outbound reply, constructed once per event and consumed by the reply
/// call. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyMessage {
    Text {
        text: String,
    },
    Image {
        original_url: String,
        preview_url: String,
    },
}

impl ReplyMessage {
    pub fn text(text: impl Into<String>) -> Self {
        ReplyMessage::Text { text: text.into() }
    }
}

/// Raw attachment bytes plus the content type the platform declared for
/// them. Owned by a single pipeline invocation and dropped after decode.
#[derive(Debug, Clone)]
pub struct ImageContent {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
