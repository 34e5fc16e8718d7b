// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The project skeleton manifest.
//!
//! A [`Layout`] names a project root directory plus the directories and empty
//! files to create beneath it. The built-in [`Layout::image_generator`] is the
//! skeleton for the image-generator web app; custom layouts can be loaded
//! from TOML:
//!
//! ```toml
//! root = "my-app"
//! dirs = ["src", "assets/icons"]
//! files = ["README.md", "src/main.py"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root directory name of the built-in layout.
pub const IMAGE_GENERATOR_ROOT: &str = "image-generator-streamlit";

const IMAGE_GENERATOR_DIRS: &[&str] = &[
    "config",
    "services",
    "utils",
    "pages",
    "storage/uploads/single_person",
    "storage/uploads/couples",
    "storage/generated/single_person",
    "storage/generated/couples",
    "storage/temp",
    "database",
];

const IMAGE_GENERATOR_FILES: &[&str] = &[
    "app.py",
    "requirements.txt",
    "README.md",
    "config/__init__.py",
    "config/settings.py",
    "config/prompts.py",
    "config/api_keys.json",
    "services/__init__.py",
    "services/gemini_client.py",
    "services/api_manager.py",
    "services/face_detector.py",
    "utils/__init__.py",
    "utils/image_utils.py",
    "utils/storage.py",
    "pages/1_Single_Person.py",
    "pages/2_Couple_Generation.py",
    "pages/3_Gallery.py",
    "pages/4_API_Setup.py",
    "database/sessions.db",
];

/// Whether a layout entry is a directory or an empty file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// A single path in a layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// A project skeleton: a root directory plus the dirs and files inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Project directory name, created under the base directory.
    pub root: String,
    /// Directories to create, relative to the root.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,
    /// Empty files to create, relative to the root.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Layout {
    /// The skeleton of the image-generator web app.
    pub fn image_generator() -> Self {
        Layout {
            root: IMAGE_GENERATOR_ROOT.to_string(),
            dirs: IMAGE_GENERATOR_DIRS.iter().map(PathBuf::from).collect(),
            files: IMAGE_GENERATOR_FILES.iter().map(PathBuf::from).collect(),
        }
    }

    /// Parses and validates a layout from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let layout: Layout = toml::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads, parses and validates a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        tracing::debug!("loaded layout from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// All entries in creation order: directories first, then files, each in
    /// declaration order.
    pub fn entries(&self) -> Vec<Entry> {
        let dirs = self.dirs.iter().map(|p| Entry {
            path: p.clone(),
            kind: EntryKind::Dir,
        });
        let files = self.files.iter().map(|p| Entry {
            path: p.clone(),
            kind: EntryKind::File,
        });
        dirs.chain(files).collect()
    }

    /// Checks that every path is a plain relative path and that every file's
    /// parent directory will exist by the time the file is created.
    pub fn validate(&self) -> Result<()> {
        let root = Path::new(&self.root);
        if self.root.trim().is_empty() {
            return Err(Error::InvalidLayout("root cannot be empty".to_string()));
        }
        if root
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(Error::InvalidLayout(format!(
                "root '{}' must be a relative path without '..'",
                self.root
            )));
        }

        let mut seen = HashSet::new();
        for entry in self.entries() {
            check_relative(&entry.path)?;
            if !seen.insert(entry.path.clone()) {
                return Err(Error::InvalidLayout(format!(
                    "duplicate entry '{}'",
                    entry.path.display()
                )));
            }
        }

        for file in &self.files {
            let parent = file.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                continue;
            }
            let covered = self.dirs.iter().any(|d| d.starts_with(parent));
            if !covered {
                return Err(Error::InvalidLayout(format!(
                    "file '{}' is inside '{}', which is not a declared directory",
                    file.display(),
                    parent.display()
                )));
            }
            if self.files.iter().any(|f| parent.starts_with(f)) {
                return Err(Error::InvalidLayout(format!(
                    "'{}' is declared as a file but used as a directory",
                    parent.display()
                )));
            }
        }

        for dir in &self.dirs {
            if let Some(file) = self.files.iter().find(|f| dir.starts_with(f)) {
                return Err(Error::InvalidLayout(format!(
                    "'{}' is declared as a file but used as a directory",
                    file.display()
                )));
            }
        }

        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::image_generator()
    }
}

fn check_relative(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidLayout("entry path cannot be empty".to_string()));
    }
    if path.components().all(|c| matches!(c, Component::Normal(_))) {
        Ok(())
    } else {
        Err(Error::InvalidLayout(format!(
            "'{}' must be a relative path without '.' or '..'",
            path.display()
        )))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
