//! Reactive obstacle avoidance.
//!
//! Every cycle the forward half of the sonar ring is split into clusters:
//!
//! ```text
//!              front (3, 4)
//!   front_left (1, 2)   front_right (5, 6)
//!   left (0)                   right (7)
//! ```
//!
//! A cluster is "near" when any of its in-band readings is below the near
//! threshold. The cluster state is looked up in an ordered decision table
//! (see [`select_maneuver`]) and turned into a command. Nothing is
//! remembered between cycles and the occupancy grids are never touched.
//!
//! Turning speed scales with how close the obstacle is:
//! `(nearest front-diagonal reading - offset) / divisor`.

mod table;

pub use table::{ClusterState, Maneuver, select_maneuver};

use dhwani_map::RangeBand;

use crate::config::{AvoidanceSection, BeamLayout, NavConfig, Rounding};
use crate::error::Result;

/// Command emitted for one cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidanceCommand {
    /// Which table row fired
    pub maneuver: Maneuver,
    /// Forward velocity (negative reverses)
    pub linear_velocity: f32,
    /// Heading change to steer towards (degrees)
    pub angular_command: f32,
}

/// Stateless avoidance policy
#[derive(Clone, Debug)]
pub struct ReactiveAvoidance {
    near_threshold: f32,
    turn_rate: f32,
    cruise_speed: f32,
    reverse_speed: f32,
    slowdown_offset: f32,
    slowdown_divisor: f32,
    rounding: Rounding,
    beams: BeamLayout,
    band: RangeBand,
}

impl ReactiveAvoidance {
    /// Create a policy from a section and the valid-range band.
    ///
    /// The section is assumed validated.
    pub fn new(section: &AvoidanceSection, band: RangeBand) -> Self {
        Self {
            near_threshold: section.near_threshold,
            turn_rate: section.turn_rate,
            cruise_speed: section.cruise_speed,
            reverse_speed: section.reverse_speed,
            slowdown_offset: section.slowdown_offset,
            slowdown_divisor: section.slowdown_divisor,
            rounding: section.rounding,
            beams: section.beams.clone(),
            band,
        }
    }

    /// Validate and build from the full configuration
    pub fn from_config(config: &NavConfig) -> Result<Self> {
        config.sensor.validate()?;
        config.avoidance.validate(config.sensor.beam_count)?;
        Ok(Self::new(&config.avoidance, config.sensor.range_band()))
    }

    /// Reading for `beam` if present and in band
    #[inline]
    fn valid(&self, readings: &[f32], beam: usize) -> Option<f32> {
        readings
            .get(beam)
            .copied()
            .filter(|&range| self.band.contains(range))
    }

    fn any_near(&self, readings: &[f32], groups: &[&[usize]]) -> bool {
        groups
            .iter()
            .flat_map(|beams| beams.iter())
            .filter_map(|&beam| self.valid(readings, beam))
            .any(|range| range < self.near_threshold)
    }

    fn nearest(&self, readings: &[f32], beams: &[usize]) -> Option<f32> {
        beams
            .iter()
            .filter_map(|&beam| self.valid(readings, beam))
            .reduce(f32::min)
    }

    /// Which clusters are inside the near threshold
    pub fn classify(&self, readings: &[f32]) -> ClusterState {
        let beams = &self.beams;
        ClusterState {
            front: self.any_near(readings, &[beams.front.as_slice()]),
            left: self.any_near(readings, &[beams.front_left.as_slice(), beams.left.as_slice()]),
            right: self.any_near(
                readings,
                &[beams.front_right.as_slice(), beams.right.as_slice()],
            ),
        }
    }

    /// Turning speed from the diagonal beams, or the side beams if no
    /// diagonal reading is in band.
    fn slowdown_speed(&self, readings: &[f32], diagonal: &[usize], side: &[usize]) -> f32 {
        let nearest = self
            .nearest(readings, diagonal)
            .or_else(|| self.nearest(readings, side))
            .unwrap_or(self.near_threshold);
        self.rounding
            .apply((nearest - self.slowdown_offset) / self.slowdown_divisor)
    }

    /// Pick this cycle's command from raw readings indexed by beam.
    ///
    /// Readings outside the valid band are ignored, as are beams past the
    /// end of `readings`.
    pub fn decide(&self, readings: &[f32]) -> AvoidanceCommand {
        let state = self.classify(readings);
        let maneuver = select_maneuver(&state);

        let (linear_velocity, angular_command) = match maneuver {
            Maneuver::TurnRight => (
                self.slowdown_speed(readings, &self.beams.front_left, &self.beams.left),
                -self.turn_rate,
            ),
            Maneuver::TurnLeft => (
                self.slowdown_speed(readings, &self.beams.front_right, &self.beams.right),
                self.turn_rate,
            ),
            Maneuver::ReverseTurn => (self.reverse_speed, self.turn_rate),
            Maneuver::Cruise => (self.cruise_speed, 0.0),
        };

        AvoidanceCommand {
            maneuver,
            linear_velocity,
            angular_command,
        }
    }
}
