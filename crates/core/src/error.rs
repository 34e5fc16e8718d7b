// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for trellis-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in trellis-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("cannot enter {}: {reason}", path.display())]
    BaseDir { path: PathBuf, reason: String },

    #[error("unsupported file extension '{ext}'\n  hint: allowed extensions are: {allowed}")]
    UnsupportedExtension { ext: String, allowed: String },

    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("not a recognized image: {}", .0.display())]
    NotAnImage(PathBuf),

    #[error("invalid size '{0}'\n  hint: use WIDTHxHEIGHT with non-zero values, e.g. 512x512")]
    InvalidSize(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid prefix '{0}'\n  hint: use ASCII letters, digits, '_' or '-'")]
    InvalidPrefix(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: single_person, couples")]
    InvalidCategory(String),

    #[error("invalid storage area: '{0}'\n  hint: valid areas are: uploads, generated, temp")]
    InvalidArea(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized Result type for trellis-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
