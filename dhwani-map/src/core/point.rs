//! Point and coordinate types for the evidence grids.

use serde::{Deserialize, Serialize};

/// Grid coordinates (integer cell indices).
///
/// Signed so that a projection landing left of or below the grid is
/// representable and can be rejected instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (first map index, one dump row per value)
    pub x: i32,
    /// Y coordinate (second map index, one dump column per value)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// World coordinates in sensor units
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at a given bearing (degrees, CCW from +X) and distance from this point
    #[inline]
    pub fn polar_offset(&self, bearing_deg: f32, distance: f32) -> WorldPoint {
        let (sin, cos) = bearing_deg.to_radians().sin_cos();
        WorldPoint::new(self.x + distance * cos, self.y + distance * sin)
    }

    /// Both components finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polar_offset_axes() {
        let origin = WorldPoint::new(100.0, 200.0);

        let east = origin.polar_offset(0.0, 50.0);
        assert_relative_eq!(east.x, 150.0, epsilon = 1e-3);
        assert_relative_eq!(east.y, 200.0, epsilon = 1e-3);

        let north = origin.polar_offset(90.0, 50.0);
        assert_relative_eq!(north.x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(north.y, 250.0, epsilon = 1e-3);
    }

    #[test]
    fn test_non_finite_point() {
        assert!(WorldPoint::new(1.0, 2.0).is_finite());
        assert!(!WorldPoint::new(f32::NAN, 2.0).is_finite());
        assert!(!WorldPoint::new(1.0, f32::INFINITY).is_finite());
    }
}
