// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_empty_file_gives_defaults() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.storage.max_image_size, 10 * 1024 * 1024);
    assert_eq!(settings.storage.default_extension, ".jpg");
    assert!(settings.layout.is_none());
}

#[test]
fn test_partial_storage_section() {
    let settings = Settings::from_toml_str(
        r#"
[storage]
max_image_size = 1024
"#,
    )
    .unwrap();
    assert_eq!(settings.storage.max_image_size, 1024);
    assert_eq!(settings.storage.allowed_extensions.len(), 4);
}

#[test]
fn test_unknown_field_rejected() {
    let result = Settings::from_toml_str("colour = \"blue\"");
    assert!(result.is_err());
}

#[test]
fn test_load_resolves_relative_layout() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trellis.toml");
    std::fs::write(&path, "layout = \"layouts/app.toml\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(
        settings.layout,
        Some(temp.path().join("layouts/app.toml"))
    );
}

#[test]
fn test_load_keeps_absolute_layout() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trellis.toml");
    std::fs::write(&path, "layout = \"/srv/layout.toml\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.layout, Some(PathBuf::from("/srv/layout.toml")));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Settings::load(&temp.path().join("nope.toml"));
    assert!(matches!(result, Err(crate::Error::Io(_))));
}

#[parameterized(
    dotted = { ".png", true },
    bare = { "png", true },
    upper = { ".JPG", true },
    webp = { "webp", true },
    gif = { ".gif", false },
    empty = { "", false },
)]
fn test_allows(ext: &str, expected: bool) {
    assert_eq!(StorageSettings::default().allows(ext), expected);
}

#[parameterized(
    bare = { "png", ".png" },
    dotted = { ".png", ".png" },
    upper = { "JPEG", ".jpeg" },
    padded = { " .Webp ", ".webp" },
)]
fn test_normalize_extension(input: &str, expected: &str) {
    assert_eq!(normalize_extension(input), expected);
}
