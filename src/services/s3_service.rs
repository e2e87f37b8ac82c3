use crate::config::Config;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;
use std::error::Error;

#[derive(Clone)]
pub struct S3Service {
    config: Config,
    client: Client,
}

impl S3Service {
    pub async fn new(config: Config) -> Self {
        let credentials = Credentials::new(
            config.s3_access_key.clone(),
            config.s3_secret_key.clone(),
            None,
            None,
            "static",
        );

        let region = Region::new(config.s3_region.clone());

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .endpoint_url(config.s3_endpoint.clone())
            .load()
            .await;

        // Path style for custom S3 endpoints (MinIO/Ceph/etc usually require this)
        let s3_config_builder =
            aws_sdk_s3::config::Builder::from(&shared_config).force_path_style(true);

        let client = Client::from_conf(s3_config_builder.build());

        Self { config, client }
    }

    /// Upload a blob and return its publicly resolvable URL.
    pub async fn upload_file(
        &self,
        file_data: Vec<u8>,
        key: String,
        content_type: String,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let bucket = &self.config.s3_bucket_name;

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .body(file_data.into())
            .content_type(content_type)
            .send()
            .await;

        match result {
            Ok(_) => {
                let base = self.config.s3_endpoint.trim_end_matches('/');
                // URL layout: endpoint/bucket/key
                let url = format!("{}/{}/{}", base, bucket, key);
                Ok(url)
            }
            Err(e) => {
                let err_msg = e.into_service_error();
                tracing::error!("S3 upload error: {:?}", err_msg);
                Err(format!("S3 upload failed: {}", err_msg).into())
            }
        }
    }

    /// Delete a previously uploaded blob by its public URL.
    pub async fn delete_file(&self, url: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let key = self
            .key_from_url(url)
            .ok_or_else(|| format!("URL does not belong to this bucket: {}", url))?;

        self.client
            .delete_object()
            .bucket(&self.config.s3_bucket_name)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_msg = e.into_service_error();
                tracing::error!("S3 delete error: {:?}", err_msg);
                format!("S3 delete failed: {}", err_msg)
            })?;

        Ok(())
    }

    fn key_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let base = self.config.s3_endpoint.trim_end_matches('/');
        let prefix = format!("{}/{}/", base, self.config.s3_bucket_name);
        url.strip_prefix(prefix.as_str()).filter(|k| !k.is_empty())
    }
}
