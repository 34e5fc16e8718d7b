// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trellis-core: project scaffolding and local storage
//!
//! This crate provides the layout manifest, the scaffolder and verifier that
//! apply it to disk, and the storage helpers used by the trellis CLI.

pub mod error;
pub mod image;
pub mod layout;
pub mod scaffold;
pub mod settings;
pub mod storage;
pub mod verify;

pub use error::{Error, Result};
pub use self::image::{parse_size, thumbnail, validate_image, ImageFormat, THUMBNAIL_MAX};
pub use layout::{Entry, EntryKind, Layout, IMAGE_GENERATOR_ROOT};
pub use scaffold::{scaffold, Outcome, Report};
pub use settings::{Settings, StorageSettings, SETTINGS_FILE_NAME};
pub use storage::{Area, Category, Storage};
pub use verify::{verify, Finding, Problem, VerifyOptions};
