//! Grayrelay - webhook-driven chat relay.
//!
//! Receives chat events, grayscales image attachments, stores them in
//! object storage, and replies with public URLs.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod services;
