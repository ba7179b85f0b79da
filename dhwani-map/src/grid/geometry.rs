//! World-to-cell mapping.

use crate::config::GridConfig;
use crate::core::{GridCoord, WorldPoint};

/// Maps world coordinates onto (possibly out-of-range) cell indices.
///
/// Cell `(i, j)` covers world `[(i - bias) * size, (i - bias + 1) * size)` on
/// each axis. The conversion floors, so a point just below zero lands in
/// cell `bias - 1` rather than being pulled into cell `bias`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    cell_size: f32,
    origin_bias: i32,
}

impl CellGeometry {
    /// Create a geometry from a cell size and index bias.
    pub fn new(cell_size: f32, origin_bias: i32) -> Self {
        Self {
            cell_size,
            origin_bias,
        }
    }

    /// Geometry described by a grid configuration
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.cell_size, config.origin_bias)
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Index bias
    #[inline]
    pub fn origin_bias(&self) -> i32 {
        self.origin_bias
    }

    /// Convert a world point to a cell coordinate.
    ///
    /// The result is not bounds-checked. Values beyond `i32` saturate, which
    /// keeps them outside any real grid.
    #[inline]
    pub fn world_to_cell(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(self.axis_to_cell(point.x), self.axis_to_cell(point.y))
    }

    #[inline]
    fn axis_to_cell(&self, value: f32) -> i32 {
        ((value / self.cell_size).floor() as i32).saturating_add(self.origin_bias)
    }

    /// World coordinates of a cell's center
    #[inline]
    pub fn cell_center(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            ((coord.x - self.origin_bias) as f32 + 0.5) * self.cell_size,
            ((coord.y - self.origin_bias) as f32 + 0.5) * self.cell_size,
        )
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_and_bias() {
        let geometry = CellGeometry::new(100.0, 1);

        assert_eq!(geometry.world_to_cell(WorldPoint::new(0.0, 0.0)), GridCoord::new(1, 1));
        assert_eq!(geometry.world_to_cell(WorldPoint::new(99.9, 199.9)), GridCoord::new(1, 2));
        assert_eq!(geometry.world_to_cell(WorldPoint::new(100.0, 250.0)), GridCoord::new(2, 3));
        // Floors toward negative infinity, not toward zero
        assert_eq!(geometry.world_to_cell(WorldPoint::new(-0.5, -100.5)), GridCoord::new(0, -1));
    }

    #[test]
    fn test_huge_values_saturate() {
        let geometry = CellGeometry::new(100.0, 1);
        let coord = geometry.world_to_cell(WorldPoint::new(1e30, -1e30));
        assert_eq!(coord.x, i32::MAX);
        assert_eq!(coord.y, i32::MIN + 1);
    }

    #[test]
    fn test_cell_center_round_trip() {
        let geometry = CellGeometry::default();
        let coord = GridCoord::new(42, 7);
        assert_eq!(geometry.world_to_cell(geometry.cell_center(coord)), coord);
    }
}
