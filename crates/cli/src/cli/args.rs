// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share a layout source or project location.

use std::path::PathBuf;

use clap::Args;

/// Selects a custom layout file instead of the configured/built-in one.
#[derive(Args, Clone, Debug, Default)]
pub struct LayoutArgs {
    /// Layout TOML file to use instead of the built-in skeleton
    #[arg(long, value_name = "file")]
    pub layout: Option<PathBuf>,
}

/// Location of an existing project.
#[derive(Args, Clone, Debug, Default)]
pub struct ProjectArgs {
    /// Project directory (default: the layout root under the working directory)
    #[arg(long, short = 'p', value_name = "dir")]
    pub project: Option<PathBuf>,
}
