// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_project}
  {init}        Create the project skeleton
  {check}       Verify a project tree against the skeleton
  {layout}      Print the skeleton manifest

{header_storage}
  {store}       Save an image into project storage
  {resize}      Write a scaled-down copy of an image
  {clean_temp}  Remove files from storage/temp

{header_setup}
  {completion}  Generate shell completions
",
        header_project = colors::header("Project:"),
        header_storage = colors::header("Storage:"),
        header_setup = colors::header("Setup:"),
        init = colors::literal("init"),
        check = colors::literal("check"),
        layout = colors::literal("layout"),
        store = colors::literal("store"),
        resize = colors::literal("resize"),
        clean_temp = colors::literal("clean-temp"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  trellis init                       Create image-generator-streamlit/
  trellis check --empty              Verify every placeholder is present
  trellis store face.png -c single   Save a reference image",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
