use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Image to PDF conversion settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    pub page_size: PageSize,
    pub orientation: PageOrientation,
    /// Margin on every side of fixed-size pages
    pub margin_mm: f32,
    /// Quality of the embedded JPEG data
    pub jpeg_quality: u8,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: PageOrientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            jpeg_quality: DEFAULT_PDF_JPEG_QUALITY,
        }
    }
}

impl ConversionOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(PdfError::Config(
                "Margin must be a non-negative number".to_string(),
            ));
        }

        if let Some((w, h)) = self.page_size.dimensions_mm() {
            if self.margin_mm * 2.0 >= w.min(h) {
                return Err(PdfError::Config(format!(
                    "Margin of {}mm leaves no room on a {:?} page",
                    self.margin_mm, self.page_size
                )));
            }
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PdfError::Config(format!(
                "JPEG quality {} is outside 1-100",
                self.jpeg_quality
            )));
        }

        Ok(())
    }
}
