use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;

use crate::config::Config;
use crate::repository::BlobStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Profile-picture bucket
pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
    public_base_url: String,
}

impl S3BlobStore {
    pub fn new(client: S3Client, config: &Config) -> Self {
        Self {
            client,
            bucket: config.s3_bucket.clone(),
            public_base_url: config.s3_public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the S3 client, honouring a custom endpoint when configured
    pub async fn client_from_config(config: &Config) -> S3Client {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(config.s3_force_path_style);
        if let Some(endpoint) = &config.s3_endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        S3Client::from_conf(builder.build())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BoxError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(bytes.into())
            .content_type(content_type)
            .send()
            .await?;
        Ok(format!("{}/{key}", self.public_base_url))
    }
}
