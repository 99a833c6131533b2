use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::ApiError;
use crate::models::Event;

/// Work-queue seam between the webhook receiver and the task worker.
///
/// The queue carries opaque envelopes (base64-encoded JSON events) and
/// guarantees at-least-once delivery with no ordering between events.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    async fn enqueue(&self, data: &str) -> anyhow::Result<()>;
}

/// Serialize an event into its task envelope.
pub fn encode_envelope(event: &Event) -> anyhow::Result<String> {
    let json = serde_json::to_vec(event)?;
    Ok(BASE64.encode(json))
}

/// Parse a task envelope back into an event.
pub fn decode_envelope(data: &str) -> Result<Event, ApiError> {
    let json = BASE64
        .decode(data)
        .map_err(|e| ApiError::MalformedPayload(format!("invalid base64: {e}")))?;
    serde_json::from_slice(&json)
        .map_err(|e| ApiError::MalformedPayload(format!("invalid event JSON: {e}")))
}

/// Production queue: POSTs each envelope as a `data` form field to the
/// internal task endpoint. Fire-and-forget beyond the HTTP status check.
pub struct HttpTaskQueue {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTaskQueue {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl TaskQueue for HttpTaskQueue {
    async fn enqueue(&self, data: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("data", data)])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("task endpoint returned {}", response.status());
        }
        Ok(())
    }
}

/// In-memory queue that records envelopes instead of delivering them.
/// Lets the webhook path be exercised without a network-backed queue.
#[derive(Default)]
pub struct InMemoryQueue {
    envelopes: std::sync::Mutex<Vec<String>>,
}

impl InMemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelopes enqueued so far, in arrival order.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut self.envelopes.lock().expect("queue lock poisoned"))
    }
}

#[async_trait]
impl TaskQueue for InMemoryQueue {
    async fn enqueue(&self, data: &str) -> anyhow::Result<()> {
        self.envelopes
            .lock()
            .expect("queue lock poisoned")
            .push(data.to_string());
        Ok(())
    }
}
