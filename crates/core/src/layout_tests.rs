// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_image_generator_root() {
    let layout = Layout::image_generator();
    assert_eq!(layout.root, "image-generator-streamlit");
}

#[test]
fn test_image_generator_dirs() {
    let layout = Layout::image_generator();
    let dirs: Vec<_> = layout.dirs.iter().map(|p| p.to_str().unwrap()).collect();
    assert_eq!(
        dirs,
        vec![
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
        ]
    );
}

#[test]
fn test_image_generator_has_nineteen_files() {
    let layout = Layout::image_generator();
    assert_eq!(layout.files.len(), 19);
    for name in [
        "app.py",
        "config/settings.py",
        "services/gemini_client.py",
        "database/sessions.db",
        "requirements.txt",
    ] {
        assert!(
            layout.files.contains(&PathBuf::from(name)),
            "missing {}",
            name
        );
    }
}

#[test]
fn test_image_generator_is_valid() {
    Layout::image_generator().validate().unwrap();
}

#[test]
fn test_default_is_image_generator() {
    assert_eq!(Layout::default(), Layout::image_generator());
}

#[test]
fn test_entries_dirs_before_files() {
    let layout = Layout::image_generator();
    let entries = layout.entries();
    assert_eq!(entries.len(), 29);

    let first_file = entries
        .iter()
        .position(|e| e.kind == EntryKind::File)
        .unwrap();
    assert_eq!(first_file, layout.dirs.len());
    assert!(entries[first_file..]
        .iter()
        .all(|e| e.kind == EntryKind::File));
    assert_eq!(entries[0].path, PathBuf::from("config"));
    assert_eq!(entries[first_file].path, PathBuf::from("app.py"));
}

#[test]
fn test_from_toml_str() {
    let layout = Layout::from_toml_str(
        r#"
root = "my-app"
dirs = ["src", "assets/icons"]
files = ["README.md", "src/main.py", "assets/logo.svg"]
"#,
    )
    .unwrap();
    assert_eq!(layout.root, "my-app");
    assert_eq!(layout.dirs.len(), 2);
    assert_eq!(layout.files.len(), 3);
}

#[test]
fn test_from_toml_str_defaults_to_empty_lists() {
    let layout = Layout::from_toml_str("root = \"bare\"").unwrap();
    assert!(layout.dirs.is_empty());
    assert!(layout.files.is_empty());
}

#[test]
fn test_from_toml_str_missing_root() {
    let err = Layout::from_toml_str("dirs = [\"a\"]").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_load_from_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("layout.toml");
    std::fs::write(&path, "root = \"x\"\ndirs = [\"a\"]\nfiles = [\"a/b.txt\"]\n").unwrap();
    let layout = Layout::load(&path).unwrap();
    assert_eq!(layout.files, vec![PathBuf::from("a/b.txt")]);
}

#[parameterized(
    empty_root = { "root = \"\"" },
    absolute_root = { "root = \"/tmp/x\"" },
    parent_root = { "root = \"../x\"" },
    parent_dir = { "root = \"x\"\ndirs = [\"../escape\"]" },
    absolute_file = { "root = \"x\"\nfiles = [\"/etc/passwd\"]" },
    dot_entry = { "root = \"x\"\ndirs = [\"./a\"]" },
    empty_entry = { "root = \"x\"\nfiles = [\"\"]" },
    duplicate_dir = { "root = \"x\"\ndirs = [\"a\", \"a\"]" },
    dir_and_file = { "root = \"x\"\ndirs = [\"a\"]\nfiles = [\"a\"]" },
    undeclared_parent = { "root = \"x\"\nfiles = [\"missing/file.txt\"]" },
    file_as_parent = { "root = \"x\"\ndirs = [\"a/b\"]\nfiles = [\"a\"]" },
)]
fn test_invalid_layouts(text: &str) {
    let err = Layout::from_toml_str(text).unwrap_err();
    assert!(
        matches!(err, Error::InvalidLayout(_)),
        "expected InvalidLayout, got {:?}",
        err
    );
}

#[parameterized(
    top_level_file = { "root = \"x\"\nfiles = [\"a.txt\"]" },
    file_in_declared_dir = { "root = \"x\"\ndirs = [\"a\"]\nfiles = [\"a/b.txt\"]" },
    file_in_implied_parent = { "root = \"x\"\ndirs = [\"a/b/c\"]\nfiles = [\"a/top.txt\"]" },
    nested_root = { "root = \"work/app\"" },
)]
fn test_valid_layouts(text: &str) {
    Layout::from_toml_str(text).unwrap();
}

#[test]
fn test_serializes_to_toml() {
    let text = toml::to_string(&Layout::image_generator()).unwrap();
    assert!(text.contains("root = \"image-generator-streamlit\""));
    let back = Layout::from_toml_str(&text).unwrap();
    assert_eq!(back, Layout::image_generator());
}
