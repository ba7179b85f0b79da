//! Discretized fuzzy membership over depth and bearing.

use crate::config::FuzzyConfig;

/// Radial ring of the fan, relative to the sensed surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ring {
    /// `range - threshold`: in front of the surface
    Near,
    /// `range`: the surface itself
    Surface,
    /// `range + threshold`: behind the surface
    Far,
}

impl Ring {
    /// All rings, nearest first
    pub const ALL: [Ring; 3] = [Ring::Near, Ring::Surface, Ring::Far];

    /// Signed multiple of the distance threshold
    #[inline]
    pub fn offset_sign(self) -> f32 {
        match self {
            Ring::Near => -1.0,
            Ring::Surface => 0.0,
            Ring::Far => 1.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Angular ray of the fan, relative to the beam axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ray {
    /// `-spread`
    Clockwise,
    /// On the beam axis
    Axis,
    /// `+spread`
    CounterClockwise,
}

impl Ray {
    /// All rays, clockwise first
    pub const ALL: [Ray; 3] = [Ray::Clockwise, Ray::Axis, Ray::CounterClockwise];

    /// Signed multiple of the angular spread
    #[inline]
    pub fn offset_sign(self) -> f32 {
        match self {
            Ray::Clockwise => -1.0,
            Ray::Axis => 0.0,
            Ray::CounterClockwise => 1.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Obstacle and empty weights for each of the 9 fan positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembershipTable {
    obstacle: [[f32; 3]; 3],
    empty: [[f32; 3]; 3],
}

impl MembershipTable {
    /// Build the table from configured weights.
    ///
    /// Flank rays are attenuated by `cos(spread)` everywhere except the far
    /// ring of the empty table, which stays flat.
    pub fn from_config(config: &FuzzyConfig) -> Self {
        let flank = config.angular_spread_deg.to_radians().cos();

        let obstacle_flank = config.obstacle_flank * flank;
        let obstacle = [
            [obstacle_flank, config.obstacle_flank, obstacle_flank],
            [obstacle_flank, config.obstacle_surface, obstacle_flank],
            [obstacle_flank, config.obstacle_flank, obstacle_flank],
        ];

        let empty_flank = config.empty_near * flank;
        let empty = [
            [empty_flank, config.empty_near, empty_flank],
            [0.0, 0.0, 0.0],
            [config.empty_far, config.empty_far, config.empty_far],
        ];

        Self { obstacle, empty }
    }

    /// Obstacle confidence at a fan position
    #[inline]
    pub fn obstacle(&self, ring: Ring, ray: Ray) -> f32 {
        self.obstacle[ring.index()][ray.index()]
    }

    /// Empty confidence at a fan position
    #[inline]
    pub fn empty(&self, ring: Ring, ray: Ray) -> f32 {
        self.empty[ring.index()][ray.index()]
    }
}

impl Default for MembershipTable {
    fn default() -> Self {
        Self::from_config(&FuzzyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_obstacle_weights() {
        let table = MembershipTable::default();
        let c = 12.0f32.to_radians().cos();

        assert_relative_eq!(table.obstacle(Ring::Surface, Ray::Axis), 1.0);
        assert_relative_eq!(table.obstacle(Ring::Near, Ray::Axis), 0.8);
        assert_relative_eq!(table.obstacle(Ring::Far, Ray::Axis), 0.8);
        for ring in Ring::ALL {
            assert_relative_eq!(table.obstacle(ring, Ray::Clockwise), 0.8 * c);
            assert_relative_eq!(table.obstacle(ring, Ray::CounterClockwise), 0.8 * c);
        }
    }

    #[test]
    fn test_default_empty_weights() {
        let table = MembershipTable::default();
        let c = 12.0f32.to_radians().cos();

        assert_relative_eq!(table.empty(Ring::Near, Ray::Axis), 0.5);
        assert_relative_eq!(table.empty(Ring::Near, Ray::Clockwise), 0.5 * c);
        for ray in Ray::ALL {
            assert_eq!(table.empty(Ring::Surface, ray), 0.0);
            assert_relative_eq!(table.empty(Ring::Far, ray), 1.0);
        }
    }

    #[test]
    fn test_weights_stay_in_unit_interval() {
        let table = MembershipTable::default();
        for ring in Ring::ALL {
            for ray in Ray::ALL {
                assert!((0.0..=1.0).contains(&table.obstacle(ring, ray)));
                assert!((0.0..=1.0).contains(&table.empty(ring, ray)));
            }
        }
    }
}
