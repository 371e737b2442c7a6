//! Layout data types for collages
//!
//! These types sit between the layout arithmetic and the compositor.

use crate::constants::{MAX_CANVAS_AREA, MAX_CANVAS_DIMENSION};
use crate::types::{LayoutMode, MergeError};

/// Where and at what size one input image is drawn
///
/// Coordinates are in canvas pixels with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the source image in the input list
    pub index: usize,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
}

impl Placement {
    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.scaled_width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.scaled_height
    }

    /// True when the interiors of the two placements intersect
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Integer draw rectangle `(x, y, width, height)`
    ///
    /// Sizes never collapse below one pixel so every input stays visible.
    pub fn pixel_rect(&self) -> (i64, i64, u32, u32) {
        (
            self.x.round() as i64,
            self.y.round() as i64,
            (self.scaled_width.round() as u32).max(1),
            (self.scaled_height.round() as u32).max(1),
        )
    }
}

/// Output canvas dimensions in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Acquire a canvas for fractional dimensions.
    ///
    /// Fractions are truncated the way a drawing surface truncates assigned
    /// sizes. Fails when the result has no area or exceeds the surface limits.
    pub fn from_dimensions(width: f64, height: f64) -> Result<Self, MergeError> {
        let unavailable = |reason| MergeError::CanvasUnavailable {
            width,
            height,
            reason,
        };

        if !width.is_finite() || !height.is_finite() {
            return Err(unavailable("dimensions are not finite"));
        }
        if width < 1.0 || height < 1.0 {
            return Err(unavailable("canvas has no area"));
        }
        if width > MAX_CANVAS_DIMENSION as f64 || height > MAX_CANVAS_DIMENSION as f64 {
            return Err(unavailable("edge exceeds drawing surface limit"));
        }

        let size = Self::new(width.trunc() as u32, height.trunc() as u32);
        if size.area() > MAX_CANVAS_AREA {
            return Err(unavailable("area exceeds drawing surface limit"));
        }
        Ok(size)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Row/column counts of a grid collage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub cols: usize,
    pub rows: usize,
}

impl GridDimensions {
    /// `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`
    pub fn for_count(n: usize) -> Self {
        if n == 0 {
            return Self { cols: 0, rows: 0 };
        }
        let root = n.isqrt();
        let cols = if root * root == n { root } else { root + 1 };
        let rows = n.div_ceil(cols);
        Self { cols, rows }
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// `(col, row)` of the i-th image, filled row-major
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.cols, index / self.cols)
    }
}

/// Complete layout of one collage
#[derive(Debug, Clone, PartialEq)]
pub struct CollageLayout {
    pub mode: LayoutMode,
    pub canvas: CanvasSize,
    /// The single scale factor derived from the layout's bounding constraint
    pub scale: f64,
    /// One entry per input image, in input order
    pub placements: Vec<Placement>,
    /// Present for grid layouts only
    pub grid: Option<GridDimensions>,
}
