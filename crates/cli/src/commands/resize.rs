// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use trellis_core::settings::normalize_extension;
use trellis_core::{thumbnail, validate_image, StorageSettings};

use crate::config::Context;
use crate::error::Result;

pub fn run(ctx: &Context, file: &Path, dest: Option<&Path>, max: (u32, u32)) -> Result<()> {
    let mut out = io::stdout().lock();
    execute(ctx, file, dest, max, &mut out)
}

pub(crate) fn execute(
    ctx: &Context,
    file: &Path,
    dest: Option<&Path>,
    max: (u32, u32),
    out: &mut impl Write,
) -> Result<()> {
    let src = ctx.resolve(file);
    validate_image(&src, &ctx.settings.storage)?;

    let dest = match dest {
        Some(d) => ctx.resolve(d),
        None => default_dest(&src, &ctx.settings.storage),
    };
    let (width, height) = thumbnail(&src, &dest, max.0, max.1)?;
    writeln!(out, "{} ({}x{})", dest.display(), width, height)?;
    Ok(())
}

/// `<stem>_thumb<ext>` next to the source.
fn default_dest(src: &Path, settings: &StorageSettings) -> PathBuf {
    let stem = src
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = src
        .extension()
        .and_then(|e| e.to_str())
        .map(normalize_extension)
        .unwrap_or_else(|| normalize_extension(&settings.default_extension));
    src.with_file_name(format!("{}_thumb{}", stem, ext))
}

#[cfg(test)]
#[path = "resize_tests.rs"]
mod tests;
