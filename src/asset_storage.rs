//! Abstract remote asset storage for catalog images.
//!
//! This module provides a trait-based abstraction for uploading images
//! picked on the device to a remote image host. Records keep the local
//! device URI until an upload succeeds, then store the hosted URL.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME type assumed when the picker did not report one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image selected on the device, not yet uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalImage {
    /// Local device URI (file path or content URI)
    pub uri: String,
    /// MIME type reported by the picker, if any
    pub mime_type: Option<String>,
}

impl LocalImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: Some(mime_type.into()),
        }
    }

    /// MIME type to upload with, defaulting to [`DEFAULT_IMAGE_MIME`].
    pub fn mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME)
    }

    /// File name taken from the last segment of the URI.
    pub fn file_name(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }
}

/// Result of a successful upload to the remote host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Stable hosted URL to store on the record
    pub secure_url: String,
    /// Host identifier (e.g. "cloudinary")
    pub provider: String,
}

/// Errors that can occur during asset storage operations.
#[derive(Debug)]
pub enum AssetStorageError {
    /// Configuration is missing or invalid
    Config(String),
    /// The host rejected the upload
    Upload(String),
    /// Network or connectivity error
    Network(String),
    /// Local image could not be read
    LocalFile(String),
}

impl std::error::Error for AssetStorageError {}

impl fmt::Display for AssetStorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetStorageError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AssetStorageError::Upload(msg) => write!(f, "Upload failed: {}", msg),
            AssetStorageError::Network(msg) => write!(f, "Network error: {}", msg),
            AssetStorageError::LocalFile(msg) => write!(f, "Local file error: {}", msg),
        }
    }
}

impl From<std::io::Error> for AssetStorageError {
    fn from(err: std::io::Error) -> Self {
        AssetStorageError::LocalFile(err.to_string())
    }
}

/// Trait for remote asset storage implementations.
///
/// Uploads are not retried automatically: on failure the record keeps its
/// local URI and the caller re-invokes when the user tries again.
pub trait AssetStorage: Send + Sync {
    /// Upload a local image, returning its hosted URL.
    fn upload(
        &self,
        image: &LocalImage,
    ) -> impl std::future::Future<Output = Result<UploadedAsset, AssetStorageError>> + Send;

    /// The host identifier stored alongside uploads.
    fn provider_name(&self) -> &'static str;
}
