// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use trellis_core::{Area, Category, Storage};

use crate::config::Context;
use crate::error::Result;

pub fn run(
    ctx: &Context,
    file: &Path,
    area: Area,
    category: Category,
    prefix: &str,
    project: Option<&Path>,
) -> Result<()> {
    let mut out = io::stdout().lock();
    execute(ctx, file, area, category, prefix, project, &mut out)
}

pub(crate) fn execute(
    ctx: &Context,
    file: &Path,
    area: Area,
    category: Category,
    prefix: &str,
    project: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let layout = ctx.layout(None)?;
    let storage = Storage::new(&ctx.project_dir(project, &layout));
    let saved = storage.save(
        &ctx.resolve(file),
        area,
        category,
        prefix,
        &ctx.settings.storage,
    )?;
    writeln!(out, "{}", saved.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
