//! Strip layouts
//!
//! Horizontal rows and vertical columns. Both shrink (never enlarge) to
//! respect the width budget, then re-derive the draw scale from the truncated
//! canvas edge so images fill the cross axis of the canvas exactly.

use crate::types::{LayoutMode, MergeError};

use super::{CanvasSize, CollageLayout, Placement};

/// Lay images out left to right, vertically centred.
///
/// # Arguments
/// * `dimensions` - Natural `(width, height)` of each image
/// * `spacing` - Gap between adjacent images in pixels
/// * `max_width` - Width budget for the canvas
pub fn horizontal_layout(
    dimensions: &[(u32, u32)],
    spacing: u32,
    max_width: u32,
) -> Result<CollageLayout, MergeError> {
    let total_width: f64 = dimensions.iter().map(|&(w, _)| w as f64).sum();
    let max_height = dimensions.iter().map(|&(_, h)| h).max().unwrap_or(0) as f64;
    let spacing = spacing as f64;
    let gutters = spacing * dimensions.len().saturating_sub(1) as f64;

    let scale = (max_width as f64 / total_width).min(1.0);
    let canvas = CanvasSize::from_dimensions((total_width + gutters) * scale, max_height * scale)?;

    // Second scale, taken from the canvas height after truncation
    let draw_scale = canvas.height as f64 / max_height;
    let canvas_height = canvas.height as f64;

    let mut x = 0.0;
    let placements = dimensions
        .iter()
        .enumerate()
        .map(|(index, &(w, h))| {
            let scaled_width = w as f64 * draw_scale;
            let scaled_height = h as f64 * draw_scale;
            let placement = Placement {
                index,
                x,
                y: (canvas_height - scaled_height) / 2.0,
                scaled_width,
                scaled_height,
            };
            x += scaled_width + spacing;
            placement
        })
        .collect();

    Ok(CollageLayout {
        mode: LayoutMode::Horizontal,
        canvas,
        scale,
        placements,
        grid: None,
    })
}

/// Stack images top to bottom, horizontally centred.
///
/// Mirror of [`horizontal_layout`] with the axes swapped; the width budget
/// bounds the widest image rather than the sum.
pub fn vertical_layout(
    dimensions: &[(u32, u32)],
    spacing: u32,
    max_width: u32,
) -> Result<CollageLayout, MergeError> {
    let total_height: f64 = dimensions.iter().map(|&(_, h)| h as f64).sum();
    let max_image_width = dimensions.iter().map(|&(w, _)| w).max().unwrap_or(0) as f64;
    let spacing = spacing as f64;
    let gutters = spacing * dimensions.len().saturating_sub(1) as f64;

    let scale = (max_width as f64 / max_image_width).min(1.0);
    let canvas =
        CanvasSize::from_dimensions(max_image_width * scale, (total_height + gutters) * scale)?;

    let draw_scale = canvas.width as f64 / max_image_width;
    let canvas_width = canvas.width as f64;

    let mut y = 0.0;
    let placements = dimensions
        .iter()
        .enumerate()
        .map(|(index, &(w, h))| {
            let scaled_width = w as f64 * draw_scale;
            let scaled_height = h as f64 * draw_scale;
            let placement = Placement {
                index,
                x: (canvas_width - scaled_width) / 2.0,
                y,
                scaled_width,
                scaled_height,
            };
            y += scaled_height + spacing;
            placement
        })
        .collect();

    Ok(CollageLayout {
        mode: LayoutMode::Vertical,
        canvas,
        scale,
        placements,
        grid: None,
    })
}
