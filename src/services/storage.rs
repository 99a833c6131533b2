use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use image::DynamicImage;
use std::sync::Arc;

use crate::error::StorageError;
use crate::pipeline;

/// Object storage seam. Objects are write-once: created or overwritten,
/// never updated or deleted by this service.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload bytes under `key` with the given content type and
    /// public-read access. A failed write may leave a truncated object
    /// behind; there is no rollback.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;
}

/// Production store backed by an S3-compatible bucket.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Build a store using AWS credentials and region from the ambient
    /// environment (the SDK's standard provider chain).
    pub async fn from_env(bucket: String) -> Self {
        let aws_config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&aws_config),
            bucket,
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError(e.to_string()))?;
        Ok(())
    }
}

/// Serializes pixel grids to JPEG and uploads them.
///
/// Encode and transport failures are indistinguishable to callers; both
/// surface as [`StorageError`].
pub struct ImageWriter {
    store: Arc<dyn ObjectStore>,
}

impl ImageWriter {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn write_jpeg(&self, img: &DynamicImage, key: &str) -> Result<(), StorageError> {
        let bytes = pipeline::encode_jpeg(img).map_err(|e| StorageError(e.to_string()))?;
        self.store.put(key, bytes, "image/jpeg").await
    }
}
