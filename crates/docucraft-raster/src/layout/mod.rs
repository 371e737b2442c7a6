//! Layout calculation for collages
//!
//! This module handles all the geometry of a collage:
//! - Strip layouts (horizontal row, vertical column)
//! - Grid layout (row/column counts, cell anchoring)
//! - Canvas sizing against the drawing surface limits
//!
//! Everything here is pure arithmetic over image dimensions; pixels are only
//! touched later by the compositor.

mod grid;
mod strip;
mod types;

pub use grid::*;
pub use strip::*;
pub use types::*;

use crate::constants::MIN_COLLAGE_IMAGES;
use crate::options::LayoutSpec;
use crate::types::{LayoutMode, MergeError};

/// Compute canvas size and placements for images of the given natural
/// dimensions `(width, height)`, in input order.
pub fn compute_layout(
    dimensions: &[(u32, u32)],
    spec: &LayoutSpec,
) -> Result<CollageLayout, MergeError> {
    if dimensions.len() < MIN_COLLAGE_IMAGES {
        return Err(MergeError::InsufficientInput {
            provided: dimensions.len(),
            required: MIN_COLLAGE_IMAGES,
        });
    }

    let layout = match spec.layout {
        LayoutMode::Horizontal => horizontal_layout(dimensions, spec.spacing, spec.max_width)?,
        LayoutMode::Vertical => vertical_layout(dimensions, spec.spacing, spec.max_width)?,
        LayoutMode::Grid => grid_layout(dimensions, spec.spacing, spec.max_width)?,
    };

    log::debug!(
        "{:?} layout for {} images: canvas {}x{}, scale {:.4}",
        spec.layout,
        dimensions.len(),
        layout.canvas.width,
        layout.canvas.height,
        layout.scale
    );

    Ok(layout)
}
