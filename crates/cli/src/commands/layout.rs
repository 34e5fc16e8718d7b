// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trellis_core::{EntryKind, Layout};

use crate::cli::OutputFormat;
use crate::config::Context;
use crate::error::Result;

pub fn run(ctx: &Context, output: OutputFormat, layout: Option<&Path>) -> Result<()> {
    let layout = ctx.layout(layout)?;
    let mut out = io::stdout().lock();
    print(&layout, output, &mut out)
}

pub(crate) fn print(layout: &Layout, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(layout)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}/", layout.root)?;
            for entry in layout.entries() {
                match entry.kind {
                    EntryKind::Dir => writeln!(out, "  {}/", entry.path.display())?,
                    EntryKind::File => writeln!(out, "  {}", entry.path.display())?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
