use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Image pipeline failures, one variant per stage that can fail.
///
/// The grayscale transform has no variant: it is a pure function over a
/// finite domain.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("JPEG encode error: {0}")]
    Encode(String),
}

/// Object storage failures. Callers only branch on success vs failure, so
/// client construction, encoding, and transport problems all collapse into
/// one variant.
#[derive(Debug, Error)]
#[error("Storage write failed: {0}")]
pub struct StorageError(pub String);

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Content fetch failed: {0}")]
    Fetch(String),

    #[error("Reply send failed: {0}")]
    Reply(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingHeader(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidSignature => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::MalformedPayload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
