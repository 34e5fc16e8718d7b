// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trellis_core::scaffold;

use crate::config::Context;
use crate::error::{Error, Result};

/// The single line printed on success.
pub const SUCCESS_MESSAGE: &str = "✅ Project structure created successfully!";

pub fn run(ctx: &Context, path: Option<&Path>, layout: Option<&Path>) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    execute(ctx, path, layout, &mut out, &mut err)
}

pub(crate) fn execute(
    ctx: &Context,
    path: Option<&Path>,
    layout: Option<&Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let mut layout = ctx.layout(layout)?;

    // An explicit path names the project directory itself; its parent is the
    // base that must already exist.
    let base = match path {
        Some(p) => {
            let dir = ctx.resolve(p);
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| Error::ProjectName(p.display().to_string()))?;
            layout.root = name.to_string();
            dir.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| ctx.cwd.clone())
        }
        None => ctx.cwd.clone(),
    };

    let report = scaffold(&base, &layout)?;
    let failures = report.failures();
    if !failures.is_empty() {
        for (entry, reason) in &failures {
            writeln!(err, "failed: {}: {}", entry.path.display(), reason)?;
        }
        return Err(Error::PartialFailure {
            created: report.created(),
            failed: failures.len(),
        });
    }

    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
