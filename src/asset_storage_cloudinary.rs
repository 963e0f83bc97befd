//! Cloudinary implementation of the AssetStorage trait.
//!
//! Uploads are unsigned multipart POSTs carrying the image bytes and a fixed
//! upload preset; the response's `secure_url` becomes the record's image
//! field.

use std::time::Duration;

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::asset_storage::{AssetStorage, AssetStorageError, LocalImage, UploadedAsset};

/// Cloud name of the hosted account uploads go to.
pub const DEFAULT_CLOUD_NAME: &str = "drevlezgz";

/// Unsigned upload preset configured on the account.
pub const DEFAULT_UPLOAD_PRESET: &str = "sparegold";

/// Configuration for the Cloudinary storage service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    /// Account cloud name (forms the upload URL)
    pub cloud_name: String,
    /// Unsigned upload preset sent with every request
    pub upload_preset: String,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: DEFAULT_CLOUD_NAME.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Cloudinary-backed asset storage.
pub struct CloudinaryStorage {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryStorage {
    /// Create a storage service from configuration.
    pub fn new(config: CloudinaryConfig) -> Result<Self, AssetStorageError> {
        if config.cloud_name.is_empty() {
            return Err(AssetStorageError::Config(
                "cloud_name is required".to_string(),
            ));
        }
        if config.upload_preset.is_empty() {
            return Err(AssetStorageError::Config(
                "upload_preset is required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AssetStorageError::Config(e.to_string()))?;

        Ok(Self {
            client,
            upload_url: format!(
                "https://api.cloudinary.com/v1_1/{}/image/upload",
                config.cloud_name
            ),
            upload_preset: config.upload_preset,
        })
    }

    /// The endpoint uploads are posted to.
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    async fn read_local_image(image: &LocalImage) -> Result<Vec<u8>, AssetStorageError> {
        // Device URIs arrive as plain paths or file:// URIs
        let path = image.uri.strip_prefix("file://").unwrap_or(&image.uri);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AssetStorageError::LocalFile(format!("failed to read image: {}", e)))?;
        Ok(bytes)
    }
}

impl AssetStorage for CloudinaryStorage {
    async fn upload(&self, image: &LocalImage) -> Result<UploadedAsset, AssetStorageError> {
        let bytes = Self::read_local_image(image).await?;

        let part = multipart::Part::bytes(bytes)
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(|e| AssetStorageError::Upload(format!("invalid mime type: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AssetStorageError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AssetStorageError::Upload(format!(
                "host returned status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AssetStorageError::Upload(format!("unexpected response: {}", e)))?;

        tracing::info!(
            file = %image.file_name(),
            url = %body.secure_url,
            "uploaded image"
        );

        Ok(UploadedAsset {
            secure_url: body.secure_url,
            provider: "cloudinary".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "cloudinary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_from_cloud_name() {
        let storage = CloudinaryStorage::new(CloudinaryConfig::default()).unwrap();
        assert_eq!(
            storage.upload_url(),
            "https://api.cloudinary.com/v1_1/drevlezgz/image/upload"
        );
    }

    #[test]
    fn test_config_requires_cloud_name() {
        let config = CloudinaryConfig {
            cloud_name: String::new(),
            upload_preset: "sparegold".to_string(),
        };
        assert!(CloudinaryStorage::new(config).is_err());
    }

    #[test]
    fn test_config_requires_upload_preset() {
        let config = CloudinaryConfig {
            cloud_name: "demo".to_string(),
            upload_preset: String::new(),
        };
        assert!(CloudinaryStorage::new(config).is_err());
    }

    #[tokio::test]
    async fn test_upload_missing_local_file_is_local_error() {
        let storage = CloudinaryStorage::new(CloudinaryConfig::default()).unwrap();
        let image = LocalImage::new("file:///nonexistent/path/pick.jpg");

        let err = storage.upload(&image).await.unwrap_err();
        assert!(matches!(err, AssetStorageError::LocalFile(_)));
    }
}
