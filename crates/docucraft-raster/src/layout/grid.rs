//! Grid layout calculation
//!
//! Every cell is as large as the largest input on each axis. The whole grid is
//! scaled so its width equals the width budget, and images are anchored to the
//! top-left corner of their cell.

use crate::types::{LayoutMode, MergeError};

use super::{CanvasSize, CollageLayout, GridDimensions, Placement};

/// Create a grid layout.
///
/// # Arguments
/// * `dimensions` - Natural `(width, height)` of each image
/// * `spacing` - Gap between rows and between columns in pixels
/// * `max_width` - Canvas width; the grid is scaled to match it exactly
pub fn grid_layout(
    dimensions: &[(u32, u32)],
    spacing: u32,
    max_width: u32,
) -> Result<CollageLayout, MergeError> {
    let grid = GridDimensions::for_count(dimensions.len());
    let cell_width = dimensions.iter().map(|&(w, _)| w).max().unwrap_or(0) as f64;
    let cell_height = dimensions.iter().map(|&(_, h)| h).max().unwrap_or(0) as f64;
    let spacing = spacing as f64;
    let cols = grid.cols as f64;
    let rows = grid.rows as f64;

    let canvas_width = max_width as f64;
    let scale = canvas_width / (cell_width * cols + spacing * (cols - 1.0));
    let canvas_height = (cell_height * rows + spacing * (rows - 1.0)) * scale;
    let canvas = CanvasSize::from_dimensions(canvas_width, canvas_height)?;

    let placements = dimensions
        .iter()
        .enumerate()
        .map(|(index, &(w, h))| {
            let (col, row) = grid.position(index);
            Placement {
                index,
                x: col as f64 * (cell_width * scale + spacing),
                y: row as f64 * (cell_height * scale + spacing),
                scaled_width: w as f64 * scale,
                scaled_height: h as f64 * scale,
            }
        })
        .collect();

    Ok(CollageLayout {
        mode: LayoutMode::Grid,
        canvas,
        scale,
        placements,
        grid: Some(grid),
    })
}
