//! Dense confidence grid.

use crate::core::GridCoord;
use crate::error::{MapError, Result};

/// A fixed-size 2D array of confidences in `[0, 1]`.
///
/// Storage is row-major on `y` (`index = y * width + x`). The grid never
/// resizes; coordinates outside `[0, width) x [0, height)` have no index.
#[derive(Clone, Debug, PartialEq)]
pub struct EvidenceGrid {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl EvidenceGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: f32) -> Self {
        Self {
            values: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if coordinates are inside the grid
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert coordinates to a flat index, `None` when outside the grid
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Confidence at a cell
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.coord_to_index(coord).map(|i| self.values[i])
    }

    /// Mutable confidence at a cell
    #[inline]
    pub fn get_mut(&mut self, coord: GridCoord) -> Option<&mut f32> {
        let index = self.coord_to_index(coord)?;
        Some(&mut self.values[index])
    }

    /// Overwrite a cell. Returns `false` if the coordinate is outside the grid.
    pub fn set(&mut self, coord: GridCoord, value: f32) -> bool {
        match self.get_mut(coord) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Raw values in storage order
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Fail unless `other` has the same dimensions.
    pub fn ensure_same_shape(&self, other: &EvidenceGrid) -> Result<()> {
        if self.width == other.width && self.height == other.height {
            Ok(())
        } else {
            Err(MapError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            })
        }
    }

    /// Number of cells whose value is not `baseline`
    pub fn count_differing(&self, baseline: f32) -> usize {
        self.values.iter().filter(|&&v| v != baseline).count()
    }
}
