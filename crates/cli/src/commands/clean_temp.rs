// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trellis_core::Storage;

use crate::config::Context;
use crate::error::Result;

pub fn run(ctx: &Context, project: Option<&Path>) -> Result<()> {
    let mut out = io::stdout().lock();
    execute(ctx, project, &mut out)
}

pub(crate) fn execute(ctx: &Context, project: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let layout = ctx.layout(None)?;
    let removed = Storage::new(&ctx.project_dir(project, &layout)).clean_temp()?;
    writeln!(out, "Removed {} temp file(s)", removed)?;
    Ok(())
}

#[cfg(test)]
#[path = "clean_temp_tests.rs"]
mod tests;
