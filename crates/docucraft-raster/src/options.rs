use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collage configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutSpec {
    pub layout: LayoutMode,
    /// Pixels inserted between adjacent images
    pub spacing: u32,
    pub background_color: BackgroundColor,
    /// Upper bound on the output canvas width
    pub max_width: u32,
    pub output_format: OutputFormat,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Horizontal,
            spacing: DEFAULT_SPACING,
            background_color: BackgroundColor::WHITE,
            max_width: DEFAULT_MAX_WIDTH,
            output_format: OutputFormat::default(),
        }
    }
}

impl LayoutSpec {
    pub fn with_layout(layout: LayoutMode) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Load a spec from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let spec: Self = serde_json::from_slice(&bytes)
            .map_err(|e| RasterError::Config(format!("Failed to parse layout spec: {}", e)))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Save the spec as pretty JSON
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RasterError::Config(format!("Failed to serialize layout spec: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(RasterError::Config(
                "Maximum width must be greater than zero".to_string(),
            ));
        }
        validate_quality(self.output_format)
    }
}

/// Image compression settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageCompressionOptions {
    /// Longest edge after downscaling
    pub max_dimension: u32,
    /// First JPEG quality tried
    pub quality: u8,
    /// Size the quality search aims for
    pub max_size_bytes: usize,
    /// Quality floor for the search
    pub min_quality: u8,
}

impl Default for ImageCompressionOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_COMPRESS_QUALITY,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            min_quality: DEFAULT_MIN_QUALITY,
        }
    }
}

impl ImageCompressionOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(RasterError::Config(
                "Maximum dimension must be greater than zero".to_string(),
            ));
        }
        if !(1..=100).contains(&self.quality) || !(1..=100).contains(&self.min_quality) {
            return Err(RasterError::Config(
                "JPEG quality must be between 1 and 100".to_string(),
            ));
        }
        if self.min_quality > self.quality {
            return Err(RasterError::Config(format!(
                "Minimum quality {} exceeds starting quality {}",
                self.min_quality, self.quality
            )));
        }
        Ok(())
    }
}

fn validate_quality(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jpeg { quality } if !(1..=100).contains(&quality) => Err(
            RasterError::Config(format!("JPEG quality {} is outside 1-100", quality)),
        ),
        _ => Ok(()),
    }
}
