pub mod codec;
pub mod collage;
mod compress;
mod constants;
mod crop;
pub mod io;
pub mod layout;
mod options;
mod types;

pub use codec::{decode_image, encode_image, is_supported_image_mime, sniff_mime};
pub use collage::{CompositeResult, compose, merge, merge_images};
pub use compress::{CompressedImage, compress_image};
pub use constants::*;
pub use crop::{CropOutput, CropRegion, crop_image, crop_to_output};
pub use io::{load_image, load_images, save_bytes};
pub use layout::{CanvasSize, CollageLayout, GridDimensions, Placement, compute_layout};
pub use options::*;
pub use types::*;
