// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use trellis_core::{Area, Category};

pub use args::{LayoutArgs, ProjectArgs};

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: trellis_core::Error| e.to_string())
}

fn parse_area(s: &str) -> Result<Area, String> {
    s.parse().map_err(|e: trellis_core::Error| e.to_string())
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    trellis_core::parse_size(s).map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Scaffold and maintain the image-generator project skeleton")]
#[command(
    long_about = "Scaffold and maintain the image-generator project skeleton.\n\n\
    Creates the directory tree and empty placeholder files, verifies existing trees,\n\
    and manages the project's local image storage."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if trellis was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Settings file (default: $TRELLIS_CONFIG, then ./trellis.toml)
    #[arg(long, global = true, value_name = "file")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the project skeleton
    #[command(after_help = colors::examples("\
Examples:
  trellis init                       Create ./image-generator-streamlit
  trellis init ~/work/gen            Create the skeleton at ~/work/gen
  trellis init --layout app.toml     Use a custom layout"))]
    Init {
        /// Project directory to create (default: the layout root)
        #[arg(value_name = "dir")]
        path: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Verify a project tree against the skeleton
    #[command(after_help = colors::examples("\
Examples:
  trellis check                      Check ./image-generator-streamlit
  trellis check my-app --empty       Also require placeholders to be empty
  trellis check -o json              Report problems as JSON"))]
    Check {
        /// Project directory to check (default: the layout root)
        #[arg(value_name = "dir")]
        path: Option<PathBuf>,

        /// Report placeholder files that are no longer empty
        #[arg(long)]
        empty: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print the skeleton manifest
    Layout {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Save an image into project storage
    #[command(after_help = colors::examples("\
Examples:
  trellis store face.jpg                       Save into uploads/single_person
  trellis store pair.png -c couples            Save into uploads/couples
  trellis store out.webp --area generated      Save a generated image
  trellis store ref.png --prefix additional_0  Name it additional_0_<millis>.png"))]
    Store {
        /// Image file to save
        #[arg(value_name = "file")]
        file: PathBuf,

        /// Category (single_person, couples)
        #[arg(long, short = 'c', default_value = "single_person", value_parser = parse_category)]
        category: Category,

        /// Storage area (uploads, generated, temp)
        #[arg(long, default_value = "uploads", value_parser = parse_area)]
        area: Area,

        /// File name prefix
        #[arg(long, default_value = "main")]
        prefix: String,

        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Write a scaled-down copy of an image
    #[command(after_help = colors::examples("\
Examples:
  trellis resize face.png                      Write face_thumb.png within 512x512
  trellis resize face.png small.jpg            Write small.jpg instead
  trellis resize face.png --max 256x256        Use a smaller bounding box"))]
    Resize {
        /// Image file to scale
        #[arg(value_name = "file")]
        file: PathBuf,

        /// Output file (default: <name>_thumb.<ext> next to the source)
        #[arg(value_name = "dest")]
        dest: Option<PathBuf>,

        /// Bounding box as WIDTHxHEIGHT; the aspect ratio is kept
        #[arg(long, default_value = "512x512", value_parser = parse_size, value_name = "WxH")]
        max: (u32, u32),
    },

    /// Remove every file below storage/temp
    CleanTemp {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
