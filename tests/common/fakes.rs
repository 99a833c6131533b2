//! Fake service implementations for integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use grayrelay::error::{ChatError, StorageError};
use grayrelay::models::{ImageContent, ReplyMessage};
use grayrelay::services::{ChatClient, ObjectStore};

/// Chat platform fake: serves a configurable attachment and records every
/// reply the relay sends.
#[derive(Default)]
pub struct FakeChat {
    content: Mutex<Option<ImageContent>>,
    replies: Mutex<Vec<(String, ReplyMessage)>>,
}

impl FakeChat {
    pub fn set_content(&self, content: ImageContent) {
        *self.content.lock().unwrap() = Some(content);
    }

    pub fn replies(&self) -> Vec<(String, ReplyMessage)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for FakeChat {
    async fn fetch_content(&self, _message_id: &str) -> Result<ImageContent, ChatError> {
        self.content
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ChatError::Fetch("no content configured".to_string()))
    }

    async fn reply(&self, reply_token: &str, message: &ReplyMessage) -> Result<(), ChatError> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), message.clone()));
        Ok(())
    }
}

/// Object store fake with per-key fault injection.
#[derive(Default)]
pub struct FakeStore {
    fail_keys: Mutex<Vec<String>>,
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl FakeStore {
    /// Make every future write to `key` fail.
    pub fn fail_key(&self, key: &str) {
        self.fail_keys.lock().unwrap().push(key.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn object(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        if self.fail_keys.lock().unwrap().iter().any(|k| k == key) {
            return Err(StorageError("injected fault".to_string()));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes, content_type.to_string()));
        Ok(())
    }
}
