// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local file storage inside a scaffolded project.
//!
//! Storage lives under `<project>/storage` and is split into areas
//! (`uploads`, `generated`, `temp`), each with one directory per category
//! (`single_person`, `couples`).

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::image::validate_image;
use crate::settings::{normalize_extension, StorageSettings};

/// Directory name of the storage tree inside a project.
pub const STORAGE_DIR_NAME: &str = "storage";

/// Top-level storage areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Uploads,
    Generated,
    Temp,
}

impl Area {
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Uploads => "uploads",
            Area::Generated => "generated",
            Area::Temp => "temp",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Area {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uploads" | "upload" => Ok(Area::Uploads),
            "generated" => Ok(Area::Generated),
            "temp" | "tmp" => Ok(Area::Temp),
            _ => Err(Error::InvalidArea(s.to_string())),
        }
    }
}

/// Who is in the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SinglePerson,
    Couples,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SinglePerson => "single_person",
            Category::Couples => "couples",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "single_person" | "single" => Ok(Category::SinglePerson),
            "couples" | "couple" => Ok(Category::Couples),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Handle on a project's storage tree.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Storage for the project at `project_dir`.
    pub fn new(project_dir: &Path) -> Self {
        Storage {
            root: project_dir.join(STORAGE_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `storage/<area>` or `storage/<area>/<category>`.
    pub fn dir(&self, area: Area, category: Option<Category>) -> PathBuf {
        let dir = self.root.join(area.as_str());
        match category {
            Some(c) => dir.join(c.as_str()),
            None => dir,
        }
    }

    /// Validates `src` as an image and copies it into
    /// `storage/<area>/<category>` as `<prefix>_<unix-millis><ext>`.
    ///
    /// Returns the path of the stored copy.
    pub fn save(
        &self,
        src: &Path,
        area: Area,
        category: Category,
        prefix: &str,
        settings: &StorageSettings,
    ) -> Result<PathBuf> {
        validate_prefix(prefix)?;
        let format = validate_image(src, settings)?;

        let ext = src
            .extension()
            .and_then(|e| e.to_str())
            .map(normalize_extension)
            .unwrap_or_else(|| normalize_extension(&settings.default_extension));

        let dir = self.dir(area, Some(category));
        fs::create_dir_all(&dir)?;

        let stamp = chrono::Utc::now().timestamp_millis();
        let (target, mut out) = create_unique(&dir, &format!("{}_{}", prefix, stamp), &ext)?;
        if let Err(e) = File::open(src).and_then(|mut input| io::copy(&mut input, &mut out)) {
            let _ = fs::remove_file(&target);
            return Err(e.into());
        }

        tracing::info!(
            "stored {} image {} as {}",
            format,
            src.display(),
            target.display()
        );
        Ok(target)
    }

    /// Deletes every file below `storage/temp`, keeping the directories.
    /// Returns the number of files removed.
    pub fn clean_temp(&self) -> Result<usize> {
        let temp = self.dir(Area::Temp, None);
        if !temp.is_dir() {
            return Ok(0);
        }
        let removed = remove_files(&temp)?;
        tracing::info!("removed {} temp file(s) from {}", removed, temp.display());
        Ok(removed)
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let valid = !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidPrefix(prefix.to_string()))
    }
}

/// Exclusively creates `dir/<stem><ext>`, or `dir/<stem>_<n><ext>` for the
/// first `n` whose name is free. Existing files are never opened.
fn create_unique(dir: &Path, stem: &str, ext: &str) -> io::Result<(PathBuf, File)> {
    let mut n = 0;
    loop {
        let candidate = if n == 0 {
            dir.join(format!("{}{}", stem, ext))
        } else {
            dir.join(format!("{}_{}{}", stem, n, ext))
        };
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e),
        }
    }
}

fn remove_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            removed += remove_files(&path)?;
        } else {
            fs::remove_file(&path)?;
            tracing::debug!("removed {}", path.display());
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
