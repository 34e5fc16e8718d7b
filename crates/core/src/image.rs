// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image validation and thumbnailing.
//!
//! A file counts as an image only if the `image` crate can decode it; a
//! matching header alone is not enough.

use std::fmt;
use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::{Error, Result};
use crate::settings::StorageSettings;

/// Default bounding box for [`thumbnail`].
pub const THUMBNAIL_MAX: (u32, u32) = (512, 512);

/// Image formats accepted into project storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    fn from_decoder(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::WebP => Some(ImageFormat::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        };
        write!(f, "{}", s)
    }
}

/// Checks that `path` has an allowed extension, fits under the size limit
/// and decodes as a JPEG, PNG or WebP image.
pub fn validate_image(path: &Path, settings: &StorageSettings) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    // Files without an extension get the default one when saved
    let effective = if ext.is_empty() {
        settings.default_extension.as_str()
    } else {
        ext.as_str()
    };
    if !settings.allows(effective) {
        return Err(Error::UnsupportedExtension {
            ext: ext.to_ascii_lowercase(),
            allowed: settings.allowed_extensions.join(", "),
        });
    }

    let size = fs::metadata(path)?.len();
    if size > settings.max_image_size {
        return Err(Error::FileTooLarge {
            size,
            max: settings.max_image_size,
        });
    }

    let (format, _) = decode(path)?;
    Ok(format)
}

/// Writes `src` scaled down to fit within `max_width` x `max_height` to
/// `dst`, keeping the aspect ratio. Images already inside the box are not
/// enlarged. The output format follows `dst`'s extension.
///
/// Returns the dimensions of the written image.
pub fn thumbnail(src: &Path, dst: &Path, max_width: u32, max_height: u32) -> Result<(u32, u32)> {
    if max_width == 0 || max_height == 0 {
        return Err(Error::InvalidSize(format!("{}x{}", max_width, max_height)));
    }
    let out_format = image::ImageFormat::from_path(dst)?;
    let (_, img) = decode(src)?;

    let mut img = if img.width() > max_width || img.height() > max_height {
        img.thumbnail(max_width, max_height)
    } else {
        img
    };
    // JPEG has no alpha channel
    if out_format == image::ImageFormat::Jpeg && img.color().has_alpha() {
        img = DynamicImage::ImageRgb8(img.to_rgb8());
    }
    img.save_with_format(dst, out_format)?;

    tracing::debug!(
        "thumbnail {} -> {} ({}x{})",
        src.display(),
        dst.display(),
        img.width(),
        img.height()
    );
    Ok((img.width(), img.height()))
}

/// Parses a `WIDTHxHEIGHT` bounding box such as `512x512`.
pub fn parse_size(s: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidSize(s.to_string());
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

fn decode(path: &Path) -> Result<(ImageFormat, DynamicImage)> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader
        .format()
        .and_then(ImageFormat::from_decoder)
        .ok_or_else(|| Error::NotAnImage(path.to_path_buf()))?;
    let img = reader.decode().map_err(|e| {
        tracing::debug!("decoding {} failed: {}", path.display(), e);
        Error::NotAnImage(path.to_path_buf())
    })?;
    Ok((format, img))
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
