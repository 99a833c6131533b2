//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use grayrelay::server::{build_router, create_app_state_with};
use grayrelay::services::InMemoryQueue;

use super::fakes::{FakeChat, FakeStore};
use super::fixtures::test_config;

/// Test application with the production router wired to fakes, which stay
/// accessible for assertions.
pub struct TestApp {
    router: axum::Router,
    pub chat: Arc<FakeChat>,
    pub store: Arc<FakeStore>,
    pub queue: Arc<InMemoryQueue>,
}

impl TestApp {
    pub fn new() -> Self {
        let chat = Arc::new(FakeChat::default());
        let store = Arc::new(FakeStore::default());
        let queue = Arc::new(InMemoryQueue::new());

        let state = create_app_state_with(
            test_config(),
            chat.clone(),
            store.clone(),
            queue.clone(),
        );
        let router = build_router(state);

        Self {
            router,
            chat,
            store,
            queue,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw body and custom headers
    pub async fn post(&self, path: &str, headers: &[(&str, &str)], body: &[u8]) -> TestResponse {
        let mut builder = Request::post(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::from(body.to_vec())).unwrap())
            .await
    }

    /// Make a POST request with a form-encoded body
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("form serializes");
        self.post(
            path,
            &[("Content-Type", "application/x-www-form-urlencoded")],
            body.as_bytes(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured HTTP response for assertions
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not valid JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
