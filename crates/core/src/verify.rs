// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checking an existing project tree against a layout.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::layout::{EntryKind, Layout};

/// Options controlling how strict verification is.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Report declared files that are not zero bytes.
    pub require_empty: bool,
}

/// What is wrong with a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Problem {
    Missing,
    NotADirectory,
    NotAFile,
    NotEmpty { size: u64 },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "missing"),
            Problem::NotADirectory => write!(f, "expected a directory"),
            Problem::NotAFile => write!(f, "expected a file"),
            Problem::NotEmpty { size } => write!(f, "not empty ({} bytes)", size),
        }
    }
}

/// A path that does not match the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path relative to the project root (`.` for the root itself).
    pub path: PathBuf,
    pub problem: Problem,
}

/// Compares `project_dir` against `layout`, returning one finding per
/// mismatched entry in creation order. An empty result means the tree
/// matches.
pub fn verify(project_dir: &Path, layout: &Layout, options: VerifyOptions) -> Vec<Finding> {
    match fs::metadata(project_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return vec![Finding {
                path: PathBuf::from("."),
                problem: Problem::NotADirectory,
            }]
        }
        Err(_) => {
            return vec![Finding {
                path: PathBuf::from("."),
                problem: Problem::Missing,
            }]
        }
    }

    let mut findings = Vec::new();
    for entry in layout.entries() {
        let problem = match fs::metadata(project_dir.join(&entry.path)) {
            Err(_) => Some(Problem::Missing),
            Ok(meta) => match entry.kind {
                EntryKind::Dir if !meta.is_dir() => Some(Problem::NotADirectory),
                EntryKind::File if !meta.is_file() => Some(Problem::NotAFile),
                EntryKind::File if options.require_empty && meta.len() > 0 => {
                    Some(Problem::NotEmpty { size: meta.len() })
                }
                _ => None,
            },
        };
        if let Some(problem) = problem {
            tracing::debug!("{}: {}", entry.path.display(), problem);
            findings.push(Finding {
                path: entry.path,
                problem,
            });
        }
    }
    findings
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
