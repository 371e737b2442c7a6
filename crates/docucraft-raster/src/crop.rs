use crate::codec::encode_image;
use crate::constants::CROP_FILENAME_PREFIX;
use crate::types::*;

/// Rectangle to keep, in source pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a pixel region from percentages of the image size.
    ///
    /// Percentages are clamped to 0-100 and edges rounded to whole pixels.
    pub fn from_percent(
        image_width: u32,
        image_height: u32,
        x_pct: f32,
        y_pct: f32,
        width_pct: f32,
        height_pct: f32,
    ) -> Self {
        let to_px = |pct: f32, extent: u32| {
            ((pct.clamp(0.0, 100.0) / 100.0) * extent as f32).round() as u32
        };

        let x = to_px(x_pct, image_width);
        let y = to_px(y_pct, image_height);
        let right = to_px(x_pct + width_pct, image_width);
        let bottom = to_px(y_pct + height_pct, image_height);

        Self::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Check that the region is non-empty and inside the image
    pub fn validate(&self, image_width: u32, image_height: u32) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidCrop(
                "crop region has no area".to_string(),
            ));
        }

        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > image_width as u64 || bottom > image_height as u64 {
            return Err(RasterError::InvalidCrop(format!(
                "region {}x{}+{}+{} exceeds image bounds {}x{}",
                self.width, self.height, self.x, self.y, image_width, image_height
            )));
        }
        Ok(())
    }
}

/// Encoded crop result
#[derive(Debug, Clone)]
pub struct CropOutput {
    /// Suggested name: `cropped_<timestamp>.<ext>`
    pub filename: String,
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Cut `region` out of `image`
pub fn crop_image(image: &RasterImage, region: CropRegion) -> Result<RasterImage> {
    region.validate(image.width(), image.height())?;
    let cropped = image
        .pixels()
        .crop_imm(region.x, region.y, region.width, region.height);
    Ok(RasterImage::new(cropped))
}

/// Crop and encode in one step
pub fn crop_to_output(
    image: &RasterImage,
    region: CropRegion,
    format: OutputFormat,
) -> Result<CropOutput> {
    let cropped = crop_image(image, region)?;
    let bytes = encode_image(cropped.pixels(), format)?;
    log::info!(
        "Cropped {}x{} -> {}x{}",
        image.width(),
        image.height(),
        cropped.width(),
        cropped.height()
    );

    Ok(CropOutput {
        filename: output_filename(CROP_FILENAME_PREFIX, format),
        bytes,
        width: cropped.width(),
        height: cropped.height(),
        format,
    })
}
