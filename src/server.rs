//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::RelayConfig;
use crate::services::{
    ChatClient, HttpChatClient, HttpTaskQueue, ObjectStore, RelayService, S3Store, TaskQueue,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub queue: Arc<dyn TaskQueue>,
    pub relay: Arc<RelayService>,
}

/// Create production application state: real S3 store, real chat client,
/// HTTP task fan-out.
pub async fn create_app_state(config: RelayConfig) -> AppState {
    let config = Arc::new(config);
    let http = reqwest::Client::new();

    let chat: Arc<dyn ChatClient> = Arc::new(HttpChatClient::new(http.clone(), &config));
    let store: Arc<dyn ObjectStore> = Arc::new(S3Store::from_env(config.bucket.clone()).await);
    let queue: Arc<dyn TaskQueue> =
        Arc::new(HttpTaskQueue::new(http, config.task_endpoint.clone()));
    let relay = Arc::new(RelayService::new(chat, store, config.clone()));

    AppState {
        config,
        queue,
        relay,
    }
}

/// Create application state from explicit parts. Integration tests use
/// this to inject fakes behind the same router as production.
pub fn create_app_state_with(
    config: Arc<RelayConfig>,
    chat: Arc<dyn ChatClient>,
    store: Arc<dyn ObjectStore>,
    queue: Arc<dyn TaskQueue>,
) -> AppState {
    let relay = Arc::new(RelayService::new(chat, store, config.clone()));
    AppState {
        config,
        queue,
        relay,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Inbound webhook from the chat platform
        .route("/callback", post(api::handle_webhook))
        // Internal task endpoint (webhook fan-out target)
        .route("/task", post(api::handle_task))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
