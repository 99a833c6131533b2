use std::sync::Arc;

use crate::models::{Event, EventMessage, RelayConfig, ReplyMessage};
use crate::pipeline;
use crate::services::chat::ChatClient;
use crate::services::storage::{ImageWriter, ObjectStore};

/// Reply sent when an image was received but could not be stored.
pub const FAILURE_TEXT: &str = "Sorry, image processing failed.";

/// Reply sent for message kinds the relay does not handle.
pub const UNSUPPORTED_TEXT: &str = "Sorry, this message type is not supported.";

/// Per-event orchestration: text echo, image pipeline, unsupported
/// fallback. One instance is shared across all units of work; it holds no
/// mutable state.
pub struct RelayService {
    chat: Arc<dyn ChatClient>,
    writer: ImageWriter,
    config: Arc<RelayConfig>,
}

impl RelayService {
    pub fn new(
        chat: Arc<dyn ChatClient>,
        store: Arc<dyn ObjectStore>,
        config: Arc<RelayConfig>,
    ) -> Self {
        Self {
            chat,
            writer: ImageWriter::new(store),
            config,
        }
    }

    /// Process one inbound event to completion.
    ///
    /// Failures before the upload stage (content fetch, decode) drop the
    /// event with no reply. Upload failures still produce a reply, the
    /// fixed failure text. Reply-send failures are logged; nothing is
    /// retried.
    pub async fn handle_event(&self, event: Event) {
        let reply = match event.message {
            EventMessage::Text { text } => {
                tracing::debug!(len = text.len(), "Echoing text message");
                ReplyMessage::text(text)
            }
            EventMessage::Image { id } => match self.process_image(&id).await {
                Some(reply) => reply,
                None => return,
            },
            EventMessage::Other => ReplyMessage::text(UNSUPPORTED_TEXT),
        };

        if let Err(e) = self.chat.reply(&event.reply_token, &reply).await {
            tracing::error!(%e, "Failed to send reply");
        }
    }

    /// Run the image pipeline for one message. `None` means the event is
    /// dropped without any reply.
    async fn process_image(&self, message_id: &str) -> Option<ReplyMessage> {
        let content = match self.chat.fetch_content(message_id).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(%e, message_id, "Failed to fetch message content");
                return None;
            }
        };

        let img = match pipeline::decode(&content) {
            Ok(img) => img,
            Err(e) => {
                tracing::error!(%e, message_id, "Failed to decode image");
                return None;
            }
        };

        let gray = pipeline::to_grayscale(&img);
        let thumb = pipeline::thumbnail(&gray);

        let original_key = format!("images/{message_id}.jpg");
        let thumbnail_key = format!("thumbnails/{message_id}.jpg");

        // Both uploads are always attempted; a failed first write does not
        // short-circuit the second, so partial success can leave an
        // orphaned object behind.
        let original_result = self.writer.write_jpeg(&gray, &original_key).await;
        let thumbnail_result = self.writer.write_jpeg(&thumb, &thumbnail_key).await;

        match (original_result, thumbnail_result) {
            (Ok(()), Ok(())) => {
                tracing::info!(message_id, "Stored grayscale image and thumbnail");
                Some(ReplyMessage::Image {
                    original_url: self.config.object_url(&original_key),
                    preview_url: self.config.object_url(&thumbnail_key),
                })
            }
            (original_result, thumbnail_result) => {
                if let Err(e) = &original_result {
                    tracing::error!(%e, key = %original_key, "Image upload failed");
                }
                if let Err(e) = &thumbnail_result {
                    tracing::error!(%e, key = %thumbnail_key, "Thumbnail upload failed");
                }
                Some(ReplyMessage::text(FAILURE_TEXT))
            }
        }
    }
}
