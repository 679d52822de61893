use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tempfile::NamedTempFile;

use crate::{halo, mask};

pub const ICON_SIZE: u32 = 1024;
pub const CORNER_RADIUS: u32 = 180;
pub const OUTPUT_FILE_NAME: &str = "AppIcon-1024.png";

/// Builds `output_dir/AppIcon-1024.png` from the image at `input` and returns its path.
///
/// Runs decode, resize, corner rounding, edge halo removal and persist, in that order.
/// Nothing is written unless every stage succeeds.
pub fn compose(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let img = decode(input)?;
    let img = resize(&img);
    let mut img = round_corners(&img);
    halo::remove_edge_halo(&mut img);
    persist(img, output_dir)
}

/// Loads the image and converts it to RGBA, adding an opaque alpha channel if needed.
pub fn decode(path: &Path) -> Result<RgbaImage> {
    let img =
        image::open(path).with_context(|| format!("Failed to decode image: {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Stretches to `ICON_SIZE` square with Lanczos3. Aspect ratio is not kept.
pub fn resize(img: &RgbaImage) -> RgbaImage {
    imageops::resize(img, ICON_SIZE, ICON_SIZE, FilterType::Lanczos3)
}

/// Clips to the rounded icon shape; alpha becomes the mask coverage.
pub fn round_corners(img: &RgbaImage) -> RgbaImage {
    let mask = mask::rounded_rect_mask(ICON_SIZE, CORNER_RADIUS);
    mask::apply_mask(img, &mask)
}

/// Encodes as PNG and atomically replaces `output_dir/AppIcon-1024.png`.
pub fn persist(img: RgbaImage, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let output_path = output_dir.join(OUTPUT_FILE_NAME);

    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .with_context(|| format!("Failed to encode {}", output_path.display()))?;

    let mut tmp = NamedTempFile::new_in(output_dir)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    tmp.write_all(&buf)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    tmp.persist(&output_path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(output_path)
}

/// blake3 digest of a file on disk, hex encoded.
pub fn file_hash(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
