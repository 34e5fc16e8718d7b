// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SUCCESS: &str = "✅ Project structure created successfully!";
pub const ROOT: &str = "image-generator-streamlit";

/// Encodes a small solid image in `format`.
pub fn image_bytes(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::RgbImage::from_pixel(width, height, image::Rgb([90, 60, 200]))
        .write_to(&mut std::io::Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

pub fn jpeg() -> Vec<u8> {
    image_bytes(8, 8, image::ImageFormat::Jpeg)
}

pub fn png() -> Vec<u8> {
    image_bytes(8, 8, image::ImageFormat::Png)
}

/// The binary with a clean environment: no settings or log overrides leak
/// in from the developer's shell.
pub fn trellis() -> Command {
    let mut cmd = cargo_bin_cmd!("trellis");
    cmd.env_remove("TRELLIS_CONFIG")
        .env_remove("TRELLIS_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to create a temp directory with the skeleton already in place.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    trellis()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}
