// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trellis_core::{verify, VerifyOptions};

use crate::cli::OutputFormat;
use crate::config::Context;
use crate::error::{Error, Result};

pub fn run(
    ctx: &Context,
    path: Option<&Path>,
    require_empty: bool,
    output: OutputFormat,
    layout: Option<&Path>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    execute(ctx, path, require_empty, output, layout, &mut out)
}

pub(crate) fn execute(
    ctx: &Context,
    path: Option<&Path>,
    require_empty: bool,
    output: OutputFormat,
    layout: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let layout = ctx.layout(layout)?;
    let project = ctx.project_dir(path, &layout);
    let findings = verify(&project, &layout, VerifyOptions { require_empty });

    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&findings)?)?;
        }
        OutputFormat::Text if findings.is_empty() => {
            writeln!(
                out,
                "ok: {} matches layout '{}'",
                project.display(),
                layout.root
            )?;
        }
        OutputFormat::Text => {
            for finding in &findings {
                writeln!(out, "{}: {}", finding.path.display(), finding.problem)?;
            }
        }
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(Error::CheckFailed(findings.len()))
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
