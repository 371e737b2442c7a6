//! Shared constants for PDF assembly

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Points per CSS pixel (96 pixels per inch)
pub const POINTS_PER_PIXEL: f32 = 72.0 / 96.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert pixels to points
#[inline]
pub fn px_to_pt(px: u32) -> f32 {
    px as f32 * POINTS_PER_PIXEL
}

// =============================================================================
// Image Conversion Defaults
// =============================================================================

/// Margin around each image on fixed-size pages (mm)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// JPEG quality used when embedding images
pub const DEFAULT_PDF_JPEG_QUALITY: u8 = 92;

/// Resource name of the image XObject on each converted page
pub const IMAGE_XOBJECT_NAME: &str = "Im0";

/// PDF version written for new documents
pub const PDF_VERSION: &str = "1.7";
