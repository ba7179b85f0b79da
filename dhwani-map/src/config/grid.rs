//! Grid dimensions and world-to-cell geometry.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

use super::defaults;

/// Largest grid (in cells) either evidence grid may allocate
pub const MAX_CELLS: usize = 1 << 26;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells (first index, rows of the dump)
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Grid height in cells (second index, columns of the dump)
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// World units per cell side
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Cells added to every index so positions just below the origin stay non-negative
    #[serde(default = "defaults::origin_bias")]
    pub origin_bias: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: defaults::grid_size(),
            height: defaults::grid_size(),
            cell_size: defaults::cell_size(),
            origin_bias: defaults::origin_bias(),
        }
    }
}

impl GridConfig {
    /// Square grid with the default cell size and bias
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
            ..Default::default()
        }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Reject dimensions and cell sizes the grids cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::InvalidConfig(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(MapError::InvalidConfig(format!(
                "grid dimensions {}x{} exceed the addressable range",
                self.width, self.height
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(MapError::InvalidConfig(format!(
                    "grid {}x{} exceeds {} cells",
                    self.width, self.height, MAX_CELLS
                )));
            }
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "cell_size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}
