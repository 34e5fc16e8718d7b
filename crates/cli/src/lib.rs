// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trls - the library behind the `trellis` CLI.
//!
//! `trellis` creates the image-generator project skeleton, checks existing
//! trees against it, and manages the project's local image storage. The
//! filesystem work lives in [`trellis_core`]; this crate adds the command
//! line, settings discovery and output formatting.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions
//! - [`Context`] - working directory plus loaded settings
//! - [`run`] - dispatches a parsed command
//! - [`Error`] - user-facing error type

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;

pub use cli::{Cli, Command, LayoutArgs, OutputFormat, ProjectArgs};
pub use commands::init::SUCCESS_MESSAGE;
pub use config::Context;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(|e| Error::BaseDir {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    // Completions need neither settings nor a working directory
    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "trellis", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::load(std::env::current_dir()?, cli.config, env::config_path())?;
    tracing::debug!("working directory {}", ctx.cwd.display());

    match cli.command {
        Command::Init { path, layout } => {
            commands::init::run(&ctx, path.as_deref(), layout.layout.as_deref())
        }
        Command::Check {
            path,
            empty,
            output,
            layout,
        } => commands::check::run(
            &ctx,
            path.as_deref(),
            empty,
            output,
            layout.layout.as_deref(),
        ),
        Command::Layout { output, layout } => {
            commands::layout::run(&ctx, output, layout.layout.as_deref())
        }
        Command::Store {
            file,
            category,
            area,
            prefix,
            project,
        } => commands::store::run(
            &ctx,
            &file,
            area,
            category,
            &prefix,
            project.project.as_deref(),
        ),
        Command::Resize { file, dest, max } => {
            commands::resize::run(&ctx, &file, dest.as_deref(), max)
        }
        Command::CleanTemp { project } => {
            commands::clean_temp::run(&ctx, project.project.as_deref())
        }
        Command::Completion { .. } => Ok(()),
    }
}
