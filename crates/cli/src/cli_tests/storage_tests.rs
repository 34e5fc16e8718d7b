// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI parsing tests for `store` and `clean-temp`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_store_defaults() {
    let cli = parse(&["trellis", "store", "face.jpg"]).unwrap();
    match cli.command {
        Command::Store {
            file,
            category,
            area,
            prefix,
            project,
        } => {
            assert_eq!(file, PathBuf::from("face.jpg"));
            assert_eq!(category, Category::SinglePerson);
            assert_eq!(area, Area::Uploads);
            assert_eq!(prefix, "main");
            assert!(project.project.is_none());
        }
        _ => panic!("expected store"),
    }
}

#[parameterized(
    couples = { "couples", Category::Couples },
    kebab = { "single-person", Category::SinglePerson },
    short = { "single", Category::SinglePerson },
)]
fn test_store_category(value: &str, expected: Category) {
    let cli = parse(&["trellis", "store", "a.png", "-c", value]).unwrap();
    match cli.command {
        Command::Store { category, .. } => assert_eq!(category, expected),
        _ => panic!("expected store"),
    }
}

#[test]
fn test_store_invalid_category_message() {
    let err = parse(&["trellis", "store", "a.png", "-c", "pets"])
        .err()
        .unwrap();
    assert!(err.to_string().contains("invalid category"));
}

#[test]
fn test_store_area_and_project() {
    let cli = parse(&[
        "trellis", "store", "a.png", "--area", "generated", "-p", "proj",
    ])
    .unwrap();
    match cli.command {
        Command::Store { area, project, .. } => {
            assert_eq!(area, Area::Generated);
            assert_eq!(project.project, Some(PathBuf::from("proj")));
        }
        _ => panic!("expected store"),
    }
}

#[test]
fn test_clean_temp_project() {
    let cli = parse(&["trellis", "clean-temp", "--project", "p"]).unwrap();
    match cli.command {
        Command::CleanTemp { project } => {
            assert_eq!(project.project, Some(PathBuf::from("p")))
        }
        _ => panic!("expected clean-temp"),
    }
}

#[test]
fn test_resize_defaults() {
    let cli = parse(&["trellis", "resize", "face.png"]).unwrap();
    match cli.command {
        Command::Resize { file, dest, max } => {
            assert_eq!(file, PathBuf::from("face.png"));
            assert!(dest.is_none());
            assert_eq!(max, (512, 512));
        }
        _ => panic!("expected resize"),
    }
}

#[test]
fn test_resize_dest_and_max() {
    let cli = parse(&["trellis", "resize", "a.png", "b.jpg", "--max", "320x200"]).unwrap();
    match cli.command {
        Command::Resize { dest, max, .. } => {
            assert_eq!(dest, Some(PathBuf::from("b.jpg")));
            assert_eq!(max, (320, 200));
        }
        _ => panic!("expected resize"),
    }
}

#[parameterized(
    zero = { "0x512" },
    single = { "512" },
    words = { "big" },
)]
fn test_resize_rejects_bad_max(value: &str) {
    let err = parse(&["trellis", "resize", "a.png", "--max", value])
        .err()
        .unwrap();
    assert!(err.to_string().contains("invalid size"));
}

#[test]
fn test_store_temp_area() {
    let cli = parse(&["trellis", "store", "a.png", "--area", "temp"]).unwrap();
    match cli.command {
        Command::Store { area, .. } => assert_eq!(area, Area::Temp),
        _ => panic!("expected store"),
    }
}
