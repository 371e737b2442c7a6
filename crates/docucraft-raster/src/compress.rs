use crate::codec::encode_image;
use crate::constants::{COMPRESS_FILENAME_PREFIX, QUALITY_STEP};
use crate::options::ImageCompressionOptions;
use crate::types::*;
use image::imageops::FilterType;

/// Result of compressing one image
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// Suggested name: `compressed_<timestamp>.jpg`
    pub filename: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// JPEG quality the search settled on
    pub quality: u8,
    /// Size of the input file in bytes
    pub original_size: usize,
}

impl CompressedImage {
    pub fn compressed_size(&self) -> usize {
        self.bytes.len()
    }

    /// Percentage saved relative to the original; negative when output grew
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size() as f64 / self.original_size as f64) * 100.0
    }
}

/// Downscale and re-encode an image as JPEG.
///
/// Quality starts at `options.quality` and drops by ten until the output fits
/// `options.max_size_bytes` or `options.min_quality` is reached; the last
/// attempt is returned even if it is still over budget.
pub fn compress_image(
    image: &RasterImage,
    original_size: usize,
    options: &ImageCompressionOptions,
) -> Result<CompressedImage> {
    options.validate()?;

    let (width, height) = fit_within(image.dimensions(), options.max_dimension);
    let resized = if (width, height) == image.dimensions() {
        image.pixels().clone()
    } else {
        log::debug!(
            "Downscaling {}x{} -> {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );
        image
            .pixels()
            .resize_exact(width, height, FilterType::Lanczos3)
    };

    let mut quality = options.quality;
    loop {
        let bytes = encode_image(&resized, OutputFormat::Jpeg { quality })?;

        if bytes.len() <= options.max_size_bytes || quality <= options.min_quality {
            log::info!(
                "Compressed {} -> {} bytes at quality {}",
                original_size,
                bytes.len(),
                quality
            );
            return Ok(CompressedImage {
                filename: output_filename(
                    COMPRESS_FILENAME_PREFIX,
                    OutputFormat::Jpeg { quality },
                ),
                bytes,
                width,
                height,
                quality,
                original_size,
            });
        }

        quality = quality
            .saturating_sub(QUALITY_STEP)
            .max(options.min_quality);
    }
}

/// Shrink `(width, height)` so the longest edge is at most `max_dimension`,
/// keeping the aspect ratio. Never enlarges.
pub fn fit_within((width, height): (u32, u32), max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dimension {
        return (width, height);
    }

    let scale = max_dimension as f64 / longest as f64;
    (
        ((width as f64 * scale).round() as u32).max(1),
        ((height as f64 * scale).round() as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within((800, 600), 1920), (800, 600));
        assert_eq!(fit_within((3840, 2160), 1920), (1920, 1080));
        assert_eq!(fit_within((1000, 4000), 1000), (250, 1000));
        assert_eq!(fit_within((5000, 1), 100), (100, 1));
    }
}
