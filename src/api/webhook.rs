use axum::{body::Bytes, extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::WebhookPayload;
use crate::server::AppState;
use crate::services::{queue, signature};

/// Signature header the chat platform sends with every webhook request.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Response from webhook delivery
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Number of events accepted for processing
    pub received: usize,
}

/// Receive chat events
///
/// Verifies the HMAC signature over the raw body, then fans each event out
/// through the task queue. Events are processed asynchronously; this
/// endpoint only acknowledges receipt.
#[utoipa::path(
    post,
    path = "/callback",
    request_body = WebhookPayload,
    responses(
        (status = 200, description = "Events accepted", body = WebhookResponse),
        (status = 400, description = "Missing signature header or malformed payload"),
        (status = 401, description = "Signature verification failed"),
    ),
    params(
        ("X-Signature" = String, Header, description = "Base64 HMAC-SHA256 of the request body"),
    ),
    tag = "Webhook"
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let claimed = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingHeader(SIGNATURE_HEADER))?;

    if !signature::verify(&state.config.channel_secret, &body, claimed) {
        tracing::warn!("Webhook signature mismatch");
        return Err(ApiError::InvalidSignature);
    }

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedPayload(format!("invalid webhook JSON: {e}")))?;

    let received = payload.events.len();
    for event in &payload.events {
        let envelope = match queue::encode_envelope(event) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(%e, "Failed to serialize event for dispatch");
                continue;
            }
        };
        // Delivery is at-least-once and best-effort per event; the batch
        // is still acknowledged when one enqueue fails.
        if let Err(e) = state.queue.enqueue(&envelope).await {
            tracing::error!(%e, "Failed to enqueue event");
        }
    }

    tracing::info!(events = received, "Webhook events dispatched");

    Ok(Json(WebhookResponse {
        status: 200,
        received,
    }))
}
