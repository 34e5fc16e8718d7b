// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings discovery and layout resolution.
//!
//! Settings come from the first of:
//! - the `--config` flag
//! - the `TRELLIS_CONFIG` environment variable
//! - `trellis.toml` in the working directory, if present
//! - built-in defaults
//!
//! The layout comes from `--layout`, else the settings' `layout` entry, else
//! the built-in image-generator skeleton.

use std::path::{Path, PathBuf};

use trellis_core::{Layout, Settings, SETTINGS_FILE_NAME};

use crate::error::{Error, Result};

/// Everything a command needs to know about its environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory the command runs in.
    pub cwd: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Builds a context for `cwd`, loading settings from `explicit` (flag),
    /// then `from_env`, then `cwd/trellis.toml`.
    pub fn load(
        cwd: PathBuf,
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
    ) -> Result<Self> {
        let settings = match settings_path(&cwd, explicit, from_env) {
            Some(path) => Settings::load(&path)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?,
            None => Settings::default(),
        };
        Ok(Context { cwd, settings })
    }

    /// Context with default settings.
    pub fn with_defaults(cwd: PathBuf) -> Self {
        Context {
            cwd,
            settings: Settings::default(),
        }
    }

    /// Resolves the layout to use, preferring `flag` over the settings.
    pub fn layout(&self, flag: Option<&Path>) -> Result<Layout> {
        let path = flag
            .map(|p| self.resolve(p))
            .or_else(|| self.settings.layout.as_ref().map(|p| self.resolve(p)));
        match path {
            Some(path) => Layout::load(&path).map_err(|e| match e {
                trellis_core::Error::InvalidLayout(msg) => {
                    Error::InvalidLayout(format!("{}: {}", path.display(), msg))
                }
                other => Error::InvalidLayout(format!("{}: {}", path.display(), other)),
            }),
            None => Ok(Layout::image_generator()),
        }
    }

    /// Project directory: `explicit` resolved against the working directory,
    /// or the layout root inside it.
    pub fn project_dir(&self, explicit: Option<&Path>, layout: &Layout) -> PathBuf {
        match explicit {
            Some(p) => self.resolve(p),
            None => self.cwd.join(&layout.root),
        }
    }

    /// Makes a relative path absolute against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

fn settings_path(
    cwd: &Path,
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit.or(from_env) {
        return Some(if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        });
    }
    let local = cwd.join(SETTINGS_FILE_NAME);
    local.is_file().then_some(local)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
