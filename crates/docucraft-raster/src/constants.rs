//! Shared constants for raster processing
//!
//! Defaults for the collage engine, encoder settings and the limits of the
//! drawing surface live here so the layout, codec and CLI layers agree.

// =============================================================================
// Collage Defaults
// =============================================================================

/// Gap inserted between adjacent images (pixels)
pub const DEFAULT_SPACING: u32 = 10;

/// Upper bound on the output canvas width (pixels)
pub const DEFAULT_MAX_WIDTH: u32 = 1200;

/// Minimum number of images a collage accepts
pub const MIN_COLLAGE_IMAGES: usize = 2;

// =============================================================================
// Encoding
// =============================================================================

/// JPEG quality used for composites (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Filename prefix for collage output
pub const COLLAGE_FILENAME_PREFIX: &str = "merged_images";

/// Filename prefix for cropped output
pub const CROP_FILENAME_PREFIX: &str = "cropped";

/// Filename prefix for compressed output
pub const COMPRESS_FILENAME_PREFIX: &str = "compressed";

// =============================================================================
// Drawing Surface Limits
// =============================================================================

/// Largest edge a canvas may have (pixels)
pub const MAX_CANVAS_DIMENSION: u32 = 32_767;

/// Largest pixel count a canvas may have
pub const MAX_CANVAS_AREA: u64 = 268_435_456;

// =============================================================================
// Image Compression Defaults
// =============================================================================

/// Longest edge allowed after compression (pixels)
pub const DEFAULT_MAX_DIMENSION: u32 = 1920;

/// Starting JPEG quality for compression
pub const DEFAULT_COMPRESS_QUALITY: u8 = 80;

/// Lowest JPEG quality the size search will try
pub const DEFAULT_MIN_QUALITY: u8 = 30;

/// Quality decrement between size-search attempts
pub const QUALITY_STEP: u8 = 10;

/// Target encoded size (bytes)
pub const DEFAULT_MAX_SIZE_BYTES: usize = 1024 * 1024;
