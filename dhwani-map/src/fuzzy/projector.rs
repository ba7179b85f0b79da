//! Fuzzy projection of one range reading into nine weighted cell votes.
//!
//! ```text
//!                    far ring      (range + t)
//!                 surface ring     (range)
//!              near ring           (range - t)
//!           /      |      \
//!     -spread    axis    +spread
//!           \      |      /
//!            \     |     /
//!               robot
//! ```
//!
//! Every fan position is a polar projection from the robot position along
//! `heading + beam angle + ray offset`, floored into a cell. Votes are not
//! bounds-checked here; the accumulator drops the ones that miss the grid.

use std::iter::FusedIterator;

use crate::config::{FuzzyConfig, GridConfig, MapConfig};
use crate::core::{GridCoord, RangeSample, RobotPose, WorldPoint};
use crate::error::{MapError, Result};
use crate::grid::CellGeometry;

use super::dirty::DirtySet;
use super::membership::{MembershipTable, Ray, Ring};

/// Number of votes produced by every projection
pub const FAN_SIZE: usize = 9;

/// One (cell, obstacle confidence, empty confidence) vote
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzyVote {
    /// Target cell, possibly outside the grid
    pub cell: GridCoord,
    /// Obstacle confidence in `[0, 1]`
    pub obstacle: f32,
    /// Empty confidence in `[0, 1]`
    pub empty: f32,
}

/// Projects readings onto the grid through a fixed membership table.
#[derive(Clone, Debug)]
pub struct FuzzyCellProjector {
    geometry: CellGeometry,
    membership: MembershipTable,
    distance_threshold: f32,
    angular_spread_deg: f32,
}

impl FuzzyCellProjector {
    /// Create a projector, validating both sections first.
    pub fn new(grid: &GridConfig, fuzzy: &FuzzyConfig) -> Result<Self> {
        grid.validate()?;
        fuzzy.validate()?;

        Ok(Self {
            geometry: CellGeometry::from_config(grid),
            membership: MembershipTable::from_config(fuzzy),
            distance_threshold: fuzzy.distance_threshold,
            angular_spread_deg: fuzzy.angular_spread_deg,
        })
    }

    /// Create a projector from a full map configuration
    pub fn from_config(config: &MapConfig) -> Result<Self> {
        Self::new(&config.grid, &config.fuzzy)
    }

    /// Cell geometry in use
    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    /// Membership weights in use
    pub fn membership(&self) -> &MembershipTable {
        &self.membership
    }

    /// Radial fuzz half-width
    pub fn distance_threshold(&self) -> f32 {
        self.distance_threshold
    }

    /// Build the fan for one reading.
    ///
    /// Rejects a non-finite pose, a non-finite beam angle, and a range that
    /// is not a positive finite number. Range-band filtering is the
    /// caller's job.
    pub fn project(&self, pose: &RobotPose, sample: &RangeSample) -> Result<FuzzyFan> {
        if !pose.is_finite() {
            return Err(MapError::DegenerateInput(format!(
                "pose ({}, {}, {}) is not finite",
                pose.x, pose.y, pose.heading_deg
            )));
        }
        if !(sample.range.is_finite() && sample.range > 0.0) {
            return Err(MapError::DegenerateInput(format!(
                "beam {} range {} is not a positive finite value",
                sample.beam, sample.range
            )));
        }
        if !sample.angle_deg.is_finite() {
            return Err(MapError::DegenerateInput(format!(
                "beam {} angle {} is not finite",
                sample.beam, sample.angle_deg
            )));
        }

        Ok(FuzzyFan {
            origin: pose.position(),
            bearing_deg: pose.heading_deg + sample.angle_deg,
            range: sample.range,
            distance_threshold: self.distance_threshold,
            angular_spread_deg: self.angular_spread_deg,
            geometry: self.geometry,
            membership: self.membership,
        })
    }

    /// Project a reading and append all nine votes to `dirty`.
    ///
    /// Returns the number of votes appended.
    pub fn project_into(
        &self,
        pose: &RobotPose,
        sample: &RangeSample,
        dirty: &mut DirtySet,
    ) -> Result<usize> {
        let fan = self.project(pose, sample)?;
        for vote in &fan {
            dirty.push(&vote);
        }
        Ok(FAN_SIZE)
    }
}

/// The 3x3 fan for one reading.
///
/// Cheap to copy. Iteration computes each vote on demand and can be
/// restarted any number of times with the same result.
#[derive(Clone, Copy, Debug)]
pub struct FuzzyFan {
    origin: WorldPoint,
    bearing_deg: f32,
    range: f32,
    distance_threshold: f32,
    angular_spread_deg: f32,
    geometry: CellGeometry,
    membership: MembershipTable,
}

impl FuzzyFan {
    /// Iterate the nine votes, near ring first
    pub fn iter(&self) -> FanIter<'_> {
        FanIter {
            fan: self,
            position: 0,
        }
    }

    /// Absolute beam bearing (degrees)
    pub fn bearing_deg(&self) -> f32 {
        self.bearing_deg
    }

    /// Vote at one fan position
    pub fn vote(&self, ring: Ring, ray: Ray) -> FuzzyVote {
        let distance = self.range + ring.offset_sign() * self.distance_threshold;
        let bearing = self.bearing_deg + ray.offset_sign() * self.angular_spread_deg;
        let point = self.origin.polar_offset(bearing, distance);

        FuzzyVote {
            cell: self.geometry.world_to_cell(point),
            obstacle: self.membership.obstacle(ring, ray),
            empty: self.membership.empty(ring, ray),
        }
    }
}

impl<'a> IntoIterator for &'a FuzzyFan {
    type Item = FuzzyVote;
    type IntoIter = FanIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over a [`FuzzyFan`]
#[derive(Clone, Debug)]
pub struct FanIter<'a> {
    fan: &'a FuzzyFan,
    position: usize,
}

impl Iterator for FanIter<'_> {
    type Item = FuzzyVote;

    fn next(&mut self) -> Option<FuzzyVote> {
        if self.position >= FAN_SIZE {
            return None;
        }
        let ring = Ring::ALL[self.position / 3];
        let ray = Ray::ALL[self.position % 3];
        self.position += 1;
        Some(self.fan.vote(ring, ray))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = FAN_SIZE - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FanIter<'_> {}

impl FusedIterator for FanIter<'_> {}
