//! Shared test infrastructure for integration tests.

#![allow(dead_code)]

pub mod app;
pub mod fakes;
pub mod fixtures;

pub use app::{TestApp, TestResponse};
