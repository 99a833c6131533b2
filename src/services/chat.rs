use async_trait::async_trait;
use serde::Serialize;

use crate::error::ChatError;
use crate::models::{ImageContent, RelayConfig, ReplyMessage};

/// Chat platform client seam: fetch message attachments, send replies.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Fetch the raw attachment bytes for a message, with the content type
    /// the platform declared for them.
    async fn fetch_content(&self, message_id: &str) -> Result<ImageContent, ChatError>;

    /// Send a reply for the event identified by `reply_token`.
    async fn reply(&self, reply_token: &str, message: &ReplyMessage) -> Result<(), ChatError>;
}

#[derive(Serialize)]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: [&'a ReplyMessage; 1],
}

/// HTTP implementation against the chat platform REST API, authenticated
/// with the channel bearer token.
pub struct HttpChatClient {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl HttpChatClient {
    pub fn new(client: reqwest::Client, config: &RelayConfig) -> Self {
        Self {
            client,
            api_base: config.chat_api_base.trim_end_matches('/').to_string(),
            token: config.channel_token.clone(),
        }
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn fetch_content(&self, message_id: &str) -> Result<ImageContent, ChatError> {
        let url = format!("{}/v1/message/{message_id}/content", self.api_base);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ChatError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatError::Fetch(format!(
                "content endpoint returned {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ChatError::Fetch(e.to_string()))?;

        Ok(ImageContent {
            bytes: bytes.to_vec(),
            content_type,
        })
    }

    async fn reply(&self, reply_token: &str, message: &ReplyMessage) -> Result<(), ChatError> {
        let url = format!("{}/v1/message/reply", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&ReplyRequest {
                reply_token,
                messages: [message],
            })
            .send()
            .await
            .map_err(|e| ChatError::Reply(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatError::Reply(format!(
                "reply endpoint returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
