//! Raster decoding and encoding
//!
//! Input formats are identified from content, never from file names.

use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::DynamicImage;

/// MIME types accepted as image input
pub const SUPPORTED_IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/bmp",
];

/// Detect the MIME type of encoded image data from its signature
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

pub fn is_supported_image_mime(mime: &str) -> bool {
    SUPPORTED_IMAGE_MIME_TYPES.contains(&mime)
}

/// Decode encoded image bytes into a raster
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage> {
    let format = image::guess_format(bytes)
        .map_err(|_| RasterError::UnsupportedFormat("unrecognized image data".to_string()))?;

    let mime = format.to_mime_type();
    if !is_supported_image_mime(mime) {
        return Err(RasterError::UnsupportedFormat(mime.to_string()));
    }

    let pixels = image::load_from_memory_with_format(bytes, format)?;
    Ok(RasterImage::new(pixels))
}

/// Encode a raster. JPEG output drops the alpha channel.
pub fn encode_image(
    image: &DynamicImage,
    format: OutputFormat,
) -> std::result::Result<Vec<u8>, MergeError> {
    let mut bytes = Vec::new();

    let written = match format {
        OutputFormat::Jpeg { quality } => {
            if !(1..=100).contains(&quality) {
                return Err(MergeError::Encode(format!(
                    "JPEG quality {} is outside 1-100",
                    quality
                )));
            }
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))
        }
        OutputFormat::Png => image.write_with_encoder(PngEncoder::new(&mut bytes)),
    };
    written.map_err(|e| MergeError::Encode(e.to_string()))?;

    if bytes.is_empty() {
        return Err(MergeError::Encode("encoder produced no data".to_string()));
    }
    Ok(bytes)
}
