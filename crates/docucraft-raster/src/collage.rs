//! Collage merging
//!
//! This module orchestrates one merge:
//! 1. Compute the layout from image dimensions
//! 2. Fill the canvas and draw every placement in input order
//! 3. Encode the canvas

use crate::codec::encode_image;
use crate::constants::COLLAGE_FILENAME_PREFIX;
use crate::layout::{CollageLayout, compute_layout};
use crate::options::LayoutSpec;
use crate::types::*;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// Encoded composite plus its metadata
#[derive(Debug, Clone)]
pub struct CompositeResult {
    /// Suggested name: `merged_images_<timestamp>.<ext>`
    pub filename: String,
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub layout: CollageLayout,
}

impl CompositeResult {
    /// Encoded size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn width(&self) -> u32 {
        self.layout.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.layout.canvas.height
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Merge decoded images into one encoded collage.
///
/// Requires at least two images. All-or-nothing: no partial output on failure.
pub fn merge(
    images: &[RasterImage],
    spec: &LayoutSpec,
) -> std::result::Result<CompositeResult, MergeError> {
    let dimensions: Vec<(u32, u32)> = images.iter().map(RasterImage::dimensions).collect();
    let layout = compute_layout(&dimensions, spec)?;

    let canvas = compose(images, &layout, spec.background_color)?;
    let bytes = encode_image(&DynamicImage::ImageRgba8(canvas), spec.output_format)?;

    log::info!(
        "Merged {} images into {}x{} collage ({} bytes)",
        images.len(),
        layout.canvas.width,
        layout.canvas.height,
        bytes.len()
    );

    Ok(CompositeResult {
        filename: output_filename(COLLAGE_FILENAME_PREFIX, spec.output_format),
        bytes,
        format: spec.output_format,
        layout,
    })
}

/// Merge on the blocking pool
pub async fn merge_images(
    images: Vec<RasterImage>,
    spec: LayoutSpec,
) -> std::result::Result<CompositeResult, MergeError> {
    tokio::task::spawn_blocking(move || merge(&images, &spec)).await?
}

/// Draw all placements of a layout onto a freshly filled canvas.
///
/// Later images are drawn over earlier ones; anything outside the canvas is
/// clipped.
pub fn compose(
    images: &[RasterImage],
    layout: &CollageLayout,
    background: BackgroundColor,
) -> std::result::Result<RgbaImage, MergeError> {
    let mut canvas = RgbaImage::from_pixel(
        layout.canvas.width,
        layout.canvas.height,
        background.to_rgba(),
    );

    for placement in &layout.placements {
        let image = images.get(placement.index).ok_or_else(|| {
            MergeError::Unknown(format!(
                "placement refers to missing image {}",
                placement.index
            ))
        })?;

        let (x, y, width, height) = placement.pixel_rect();
        let scaled = if image.dimensions() == (width, height) {
            image.pixels().to_rgba8()
        } else {
            image
                .pixels()
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgba8()
        };

        imageops::overlay(&mut canvas, &scaled, x, y);
    }

    Ok(canvas)
}
