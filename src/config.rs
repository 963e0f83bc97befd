//! Configuration management for Spare Gold.
//!
//! This module handles loading and saving application configuration to/from
//! a JSON file in the application's data directory:
//! - store_file: path of the on-device key-value store
//! - cloudinary: image host settings (cloud name, upload preset)
//! - auth: identity provider settings (endpoint, API key)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset_storage_cloudinary::CloudinaryConfig;
use crate::auth::AuthConfig;
use crate::error::SpareResult;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigData {
    /// Path to the key-value store file
    #[serde(default)]
    pub store_file: String,
    /// Image host configuration
    #[serde(default)]
    pub cloudinary: CloudinaryConfig,
    /// Identity provider configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Configuration manager
pub struct Config {
    config_dir: PathBuf,
    config_file: PathBuf,
    data: ConfigData,
}

impl Config {
    /// Create a new configuration manager over the given directory.
    ///
    /// Loads `config.json` if present; a missing or unreadable file falls
    /// back to defaults, and the default file is written on first run.
    pub fn new(config_dir: PathBuf) -> SpareResult<Self> {
        fs::create_dir_all(&config_dir)?;
        let config_file = config_dir.join("config.json");

        let data = if config_file.exists() {
            match fs::read_to_string(&config_file) {
                Ok(content) => serde_json::from_str(&content)
                    .unwrap_or_else(|_| Self::default_data(&config_dir)),
                Err(_) => Self::default_data(&config_dir),
            }
        } else {
            Self::default_data(&config_dir)
        };

        let config = Self {
            config_dir,
            config_file,
            data,
        };

        // Write the default config on first run
        if !config.config_file.exists() {
            config.save()?;
        }

        Ok(config)
    }

    fn default_data(config_dir: &Path) -> ConfigData {
        ConfigData {
            store_file: config_dir.join("sparegold.db").to_string_lossy().to_string(),
            ..ConfigData::default()
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> SpareResult<()> {
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the key-value store file path
    pub fn store_file(&self) -> &str {
        &self.data.store_file
    }

    /// Get the image host configuration
    pub fn cloudinary(&self) -> &CloudinaryConfig {
        &self.data.cloudinary
    }

    /// Get the identity provider configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.data.auth
    }

    /// Set the identity provider API key
    pub fn set_auth_api_key(&mut self, api_key: &str) -> SpareResult<()> {
        self.data.auth.api_key = api_key.to_string();
        self.save()
    }

    /// Set the image host upload preset
    pub fn set_upload_preset(&mut self, preset: &str) -> SpareResult<()> {
        self.data.cloudinary.upload_preset = preset.to_string();
        self.save()
    }
}
