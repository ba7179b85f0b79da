//! Robot pose as reported by the dead-reckoning source.

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Robot position and heading.
///
/// Read once per cycle from the pose source and never written by the
/// mapping core. Heading is in degrees, CCW positive from +X, and is not
/// normalized: the projector only ever feeds it through `sin`/`cos`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotPose {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Heading in degrees
    pub heading_deg: f32,
}

impl RobotPose {
    /// Create a new pose
    #[inline]
    pub fn new(x: f32, y: f32, heading_deg: f32) -> Self {
        Self { x, y, heading_deg }
    }

    /// Position as a world point
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Same heading, position shifted by `offset`.
    ///
    /// Used to place the dead-reckoning origin somewhere inside the grid.
    #[inline]
    pub fn translated(&self, offset: WorldPoint) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.heading_deg)
    }

    /// A pose the projector can safely push through trigonometry
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading_deg.is_finite()
    }
}
