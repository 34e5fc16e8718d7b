// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User settings loaded from `trellis.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock settings:
//!
//! ```toml
//! layout = "layouts/custom.toml"
//!
//! [storage]
//! max_image_size = 10485760
//! allowed_extensions = [".jpg", ".jpeg", ".png", ".webp"]
//! default_extension = ".jpg"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = "trellis.toml";

/// 10 MiB.
pub const DEFAULT_MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Custom layout file, used instead of the built-in skeleton.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Limits applied to images saved into project storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSettings {
    #[serde(default = "default_max_image_size")]
    pub max_image_size: u64,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Extension given to saved files whose source has none.
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_max_image_size() -> u64 {
    DEFAULT_MAX_IMAGE_SIZE
}

fn default_allowed_extensions() -> Vec<String> {
    [".jpg", ".jpeg", ".png", ".webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_extension() -> String {
    ".jpg".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            max_image_size: default_max_image_size(),
            allowed_extensions: default_allowed_extensions(),
            default_extension: default_extension(),
        }
    }
}

impl StorageSettings {
    /// Returns true if `ext` (with or without a leading dot) is allowed.
    /// Comparison is case-insensitive.
    pub fn allows(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.allowed_extensions
            .iter()
            .any(|allowed| normalize_extension(allowed) == ext)
    }
}

/// Lowercases an extension and gives it a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from `path`. A relative `layout` path is resolved
    /// against the directory containing the settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut settings = Self::from_toml_str(&text)?;
        if let (Some(layout), Some(dir)) = (settings.layout.as_ref(), path.parent()) {
            if layout.is_relative() {
                settings.layout = Some(dir.join(layout));
            }
        }
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
