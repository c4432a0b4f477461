//! S3-backed audit log store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::errors::FormError;

/// Seam for the audit log write so tests can substitute a fake.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn put_object(&self, bucket: &str, key: &str, body: String) -> Result<(), FormError>;
}

/// Append-only writer backed by `aws-sdk-s3`. The write is acknowledged by
/// S3 and never read back.
pub struct S3LogStore {
    client: aws_sdk_s3::Client,
}

impl S3LogStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogStore for S3LogStore {
    async fn put_object(&self, bucket: &str, key: &str, body: String) -> Result<(), FormError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.into_bytes()))
            .content_type("application/json")
            .send()
            .await?;

        Ok(())
    }
}
