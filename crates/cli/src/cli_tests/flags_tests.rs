// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI parsing tests for global flags and the command factory.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;

#[test]
fn test_command_factory_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_directory_flag_is_global() {
    let cli = parse(&["trellis", "layout", "-C", "/tmp/somewhere"]).unwrap();
    assert_eq!(cli.directory, Some(PathBuf::from("/tmp/somewhere")));
}

#[test]
fn test_config_flag_before_command() {
    let cli = parse(&["trellis", "--config", "cfg.toml", "layout"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
}

#[test]
fn test_version_flag() {
    let err = parse(&["trellis", "-v"]).err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_subcommand_required() {
    assert!(parse(&["trellis"]).is_err());
}

#[test]
fn test_completion_shell() {
    let cli = parse(&["trellis", "completion", "bash"]).unwrap();
    assert!(matches!(cli.command, Command::Completion { shell: Shell::Bash }));
}

#[test]
fn test_completion_unknown_shell() {
    assert!(parse(&["trellis", "completion", "tcsh"]).is_err());
}
