use axum::{extract::State, response::IntoResponse, Form, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::queue;

/// Task envelope: one base64-encoded, JSON-serialized event per request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskRequest {
    #[serde(default)]
    pub data: String,
}

/// Response from task execution
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskResponse {
    /// Status code (200 = success)
    pub status: u16,
    /// Status message
    pub message: String,
}

/// Execute one unit of work
///
/// Internal fan-out target for the webhook receiver, not a public
/// contract. Runs the full relay pipeline for the enveloped event and
/// sends the reply before responding.
#[utoipa::path(
    post,
    path = "/task",
    request_body(content = TaskRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Event processed", body = TaskResponse),
        (status = 400, description = "Missing or malformed task envelope"),
    ),
    tag = "Worker"
)]
pub async fn handle_task(
    State(state): State<AppState>,
    Form(request): Form<TaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.data.is_empty() {
        tracing::error!("Task request without data field");
        return Err(ApiError::MalformedPayload("missing data field".to_string()));
    }

    let event = queue::decode_envelope(&request.data).inspect_err(|e| {
        tracing::error!(%e, "Failed to decode task envelope");
    })?;

    tracing::info!(
        reply_token = %event.reply_token,
        message = ?event.message,
        "Processing event"
    );

    state.relay.handle_event(event).await;

    Ok(Json(TaskResponse {
        status: 200,
        message: "Processed".to_string(),
    }))
}
