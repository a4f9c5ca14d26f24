//! Archive of uploaded résumé PDFs in S3 / MinIO.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

/// Carried in `AppState` as `Arc<dyn ResumeArchive>`.
#[async_trait]
pub trait ResumeArchive: Send + Sync {
    /// Stores the upload and returns its object key.
    async fn store(&self, file_name: &str, bytes: Bytes) -> anyhow::Result<String>;
}

pub struct S3ResumeArchive {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ResumeArchive {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ResumeArchive for S3ResumeArchive {
    async fn store(&self, file_name: &str, bytes: Bytes) -> anyhow::Result<String> {
        let key = object_key(Uuid::new_v4(), file_name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type("application/pdf")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Archived resume to s3://{}/{}", self.bucket, key);
        Ok(key)
    }
}

pub fn object_key(upload_id: Uuid, file_name: &str) -> String {
    format!("resumes/{}/{}", upload_id, sanitize_file_name(file_name))
}

/// Keeps ASCII alphanumerics, `.`, `-` and `_`; everything else becomes `_`.
/// Leading dots are dropped so a name can never walk up the key hierarchy.
pub fn sanitize_file_name(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "resume.pdf".to_string()
    } else {
        cleaned.to_string()
    }
}
