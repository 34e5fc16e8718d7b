// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the trls library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("some entries failed: {created} created, {failed} failed")]
    PartialFailure { created: usize, failed: usize },

    #[error("layout check failed: {0} problem(s)")]
    CheckFailed(usize),

    #[error("cannot enter {path}: {reason}")]
    BaseDir { path: String, reason: String },

    #[error("cannot derive a project name from '{0}'\n  hint: pass a directory path that ends in a name")]
    ProjectName(String),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for trls operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<trellis_core::Error> for Error {
    fn from(e: trellis_core::Error) -> Self {
        use trellis_core::Error as Core;
        match e {
            Core::InvalidLayout(s) => Error::InvalidLayout(s),
            Core::BaseDir { path, reason } => Error::BaseDir {
                path: path.display().to_string(),
                reason,
            },
            e @ (Core::UnsupportedExtension { .. }
            | Core::FileTooLarge { .. }
            | Core::NotAnImage(_)
            | Core::Image(_)) => Error::InvalidImage(e.to_string()),
            e @ (Core::InvalidPrefix(_)
            | Core::InvalidCategory(_)
            | Core::InvalidArea(_)
            | Core::InvalidSize(_)) => Error::InvalidInput(e.to_string()),
            Core::Io(e) => Error::Io(e),
            Core::Toml(e) => Error::Config(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
