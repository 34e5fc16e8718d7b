// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Creating a project skeleton on disk.
//!
//! Entries are created one at a time in [`Layout::entries`] order. A failing
//! entry is recorded and the run continues with the next one; only a missing
//! base directory or an uncreatable project root stops the run early.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::layout::{Entry, EntryKind, Layout};

/// What happened to a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The entry did not exist and was created.
    Created,
    /// The entry already existed; files had their mtime refreshed.
    Existed,
    /// The entry could not be created.
    Failed(String),
}

/// Result of scaffolding a layout.
#[derive(Debug, Clone)]
pub struct Report {
    /// Absolute or base-relative path of the project root.
    pub root: PathBuf,
    /// One outcome per layout entry, in creation order.
    pub entries: Vec<(Entry, Outcome)>,
}

impl Report {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn existed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Existed))
    }

    /// Entries that failed, with the reason.
    pub fn failures(&self) -> Vec<(&Entry, &str)> {
        self.entries
            .iter()
            .filter_map(|(entry, outcome)| match outcome {
                Outcome::Failed(reason) => Some((entry, reason.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Creates `layout` under `base`.
///
/// `base` must already exist. The project root `base/<layout.root>` and every
/// directory are created with create-all semantics; files are touched.
pub fn scaffold(base: &Path, layout: &Layout) -> Result<Report> {
    match fs::metadata(base) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(Error::BaseDir {
                path: base.to_path_buf(),
                reason: "not a directory".to_string(),
            })
        }
        Err(e) => {
            return Err(Error::BaseDir {
                path: base.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }

    let root = base.join(&layout.root);
    fs::create_dir_all(&root)?;
    tracing::info!("scaffolding {} into {}", layout.root, root.display());

    let mut entries = Vec::with_capacity(layout.dirs.len() + layout.files.len());
    for entry in layout.entries() {
        let target = root.join(&entry.path);
        let result = match entry.kind {
            EntryKind::Dir => create_dir(&target),
            EntryKind::File => touch(&target),
        };
        let outcome = match result {
            Ok(outcome) => {
                tracing::debug!("{:?} {}", outcome, entry.path.display());
                outcome
            }
            Err(e) => {
                tracing::warn!("failed to create {}: {}", entry.path.display(), e);
                Outcome::Failed(e.to_string())
            }
        };
        entries.push((entry, outcome));
    }

    let report = Report { root, entries };
    tracing::info!(
        created = report.created(),
        existed = report.existed(),
        failed = report.failures().len(),
        "scaffold finished"
    );
    Ok(report)
}

fn create_dir(path: &Path) -> io::Result<Outcome> {
    if path.is_dir() {
        return Ok(Outcome::Existed);
    }
    fs::create_dir_all(path)?;
    Ok(Outcome::Created)
}

/// Creates an empty file, or refreshes the mtime of an existing one without
/// touching its contents.
pub fn touch(path: &Path) -> io::Result<Outcome> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(io::Error::other("is a directory")),
        Ok(_) => {
            // A read-only handle is enough for the owner to set times
            File::open(path)?.set_modified(SystemTime::now())?;
            Ok(Outcome::Existed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            OpenOptions::new().write(true).create_new(true).open(path)?;
            Ok(Outcome::Created)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "scaffold_tests.rs"]
mod tests;
