use image::{DynamicImage, RgbaImage};
use thiserror::Error;

/// Failures of a single collage merge
///
/// A merge is all-or-nothing: any of these aborts the call and no partial
/// composite is returned.
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("At least {required} images are required, got {provided}")]
    InsufficientInput { provided: usize, required: usize },
    #[error("Canvas unavailable for {width}x{height}: {reason}")]
    CanvasUnavailable {
        width: f64,
        height: f64,
        reason: &'static str,
    },
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Unexpected merge failure: {0}")]
    Unknown(String),
}

impl From<tokio::task::JoinError> for MergeError {
    fn from(err: tokio::task::JoinError) -> Self {
        MergeError::Unknown(format!("compositing task failed: {err}"))
    }
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid crop region: {0}")]
    InvalidCrop(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// An immutable decoded bitmap
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: DynamicImage,
}

impl RasterImage {
    pub fn new(pixels: DynamicImage) -> Self {
        Self { pixels }
    }

    /// Natural width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Natural height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn into_inner(self) -> DynamicImage {
        self.pixels
    }
}

impl From<DynamicImage> for RasterImage {
    fn from(pixels: DynamicImage) -> Self {
        Self::new(pixels)
    }
}

impl From<RgbaImage> for RasterImage {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(DynamicImage::ImageRgba8(pixels))
    }
}

/// Collage arrangement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// Single row, left to right
    #[default]
    Horizontal,
    /// Single column, top to bottom
    Vertical,
    /// Rows and columns, filled row-major
    Grid,
}

/// Opaque fill color for uncovered canvas area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl BackgroundColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional)
    pub fn parse_hex(input: &str) -> Result<Self> {
        let hex = input.trim().trim_start_matches('#');
        let invalid = || RasterError::Config(format!("Invalid color: {input}"));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// Encoding applied to a finished raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum OutputFormat {
    /// Lossy, quality 1-100
    Jpeg { quality: u8 },
    /// Lossless
    Png,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: crate::constants::DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg { .. } => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}

/// Build a suggested output filename: `<prefix>_<unix millis>.<ext>`
pub fn output_filename(prefix: &str, format: OutputFormat) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        chrono::Utc::now().timestamp_millis(),
        format.extension()
    )
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::BackgroundColor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // Colors travel as hex strings in config files
    impl Serialize for BackgroundColor {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for BackgroundColor {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BackgroundColor::parse_hex(&s).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_and_short() {
        assert_eq!(
            BackgroundColor::parse_hex("#ff8000").unwrap(),
            BackgroundColor::rgb(255, 128, 0)
        );
        assert_eq!(
            BackgroundColor::parse_hex("fff").unwrap(),
            BackgroundColor::WHITE
        );
        assert_eq!(
            BackgroundColor::parse_hex("#0a0").unwrap(),
            BackgroundColor::rgb(0, 170, 0)
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(BackgroundColor::parse_hex("#12345").is_err());
        assert!(BackgroundColor::parse_hex("#gggggg").is_err());
        assert!(BackgroundColor::parse_hex("").is_err());
    }

    #[test]
    fn test_output_filename_shape() {
        let name = output_filename("merged_images", OutputFormat::default());
        assert!(name.starts_with("merged_images_"));
        assert!(name.ends_with(".jpg"));

        let stamp = &name["merged_images_".len()..name.len() - ".jpg".len()];
        assert!(stamp.parse::<i64>().is_ok());
    }
}
