//! Simulated sonar robot section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{NavError, Result};

/// Axis-aligned rectangle in world units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X
    pub min_x: f32,
    /// Minimum Y
    pub min_y: f32,
    /// Maximum X
    pub max_x: f32,
    /// Maximum Y
    pub max_y: f32,
}

impl Rect {
    /// Create a rectangle from its corners
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Corners finite and ordered
    pub fn is_well_formed(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x < self.max_x
            && self.min_y < self.max_y
    }

    /// Point inside, grown by `margin` on every side
    pub fn contains(&self, x: f32, y: f32, margin: f32) -> bool {
        x > self.min_x - margin
            && x < self.max_x + margin
            && y > self.min_y - margin
            && y < self.max_y + margin
    }
}

/// Simulation configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Random seed (0 = entropy)
    #[serde(default = "defaults::seed")]
    pub seed: u64,

    /// Seconds per cycle
    #[serde(default = "defaults::time_step")]
    pub time_step: f32,

    /// Robot footprint radius (world units)
    #[serde(default = "defaults::robot_radius")]
    pub robot_radius: f32,

    /// Fastest heading change (degrees per second)
    #[serde(default = "defaults::max_rotation_rate")]
    pub max_rotation_rate: f32,

    /// Gaussian range noise standard deviation
    #[serde(default = "defaults::range_noise_stddev")]
    pub range_noise_stddev: f32,

    /// Probability a beam returns no echo
    #[serde(default = "defaults::dropout_rate")]
    pub dropout_rate: f32,

    /// Furthest surface a beam can see
    #[serde(default = "defaults::sonar_max_range")]
    pub sonar_max_range: f32,

    /// Reported when nothing echoes
    #[serde(default = "defaults::no_echo_range")]
    pub no_echo_range: f32,

    /// Beam angles relative to heading (degrees), one per beam
    #[serde(default = "defaults::sonar_angles")]
    pub sonar_angles: Vec<f32>,

    /// Room walls; the robot starts at the dead-reckoning origin inside it
    #[serde(default = "defaults::room")]
    pub room: Rect,

    /// Box obstacles inside the room
    #[serde(default = "defaults::obstacles")]
    pub obstacles: Vec<Rect>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            seed: defaults::seed(),
            time_step: defaults::time_step(),
            robot_radius: defaults::robot_radius(),
            max_rotation_rate: defaults::max_rotation_rate(),
            range_noise_stddev: defaults::range_noise_stddev(),
            dropout_rate: defaults::dropout_rate(),
            sonar_max_range: defaults::sonar_max_range(),
            no_echo_range: defaults::no_echo_range(),
            sonar_angles: defaults::sonar_angles(),
            room: defaults::room(),
            obstacles: defaults::obstacles(),
        }
    }
}

impl SimulationSection {
    /// Validate against the ring size
    pub fn validate(&self, beam_count: usize) -> Result<()> {
        if self.sonar_angles.len() != beam_count {
            return Err(NavError::Config(format!(
                "simulation.sonar_angles has {} entries, sensor.beam_count is {}",
                self.sonar_angles.len(),
                beam_count
            )));
        }
        let positives = [
            ("time_step", self.time_step),
            ("max_rotation_rate", self.max_rotation_rate),
            ("sonar_max_range", self.sonar_max_range),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(NavError::Config(format!(
                    "simulation.{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.robot_radius.is_finite() && self.robot_radius >= 0.0)
            || !(self.range_noise_stddev.is_finite() && self.range_noise_stddev >= 0.0)
        {
            return Err(NavError::Config(
                "simulation.robot_radius and range_noise_stddev must be non-negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dropout_rate) {
            return Err(NavError::Config(format!(
                "simulation.dropout_rate must be in [0, 1], got {}",
                self.dropout_rate
            )));
        }
        if !self.room.is_well_formed() || self.obstacles.iter().any(|r| !r.is_well_formed()) {
            return Err(NavError::Config(
                "simulation room and obstacles need finite, ordered corners".into(),
            ));
        }
        if !self.room.contains(0.0, 0.0, -self.robot_radius) {
            return Err(NavError::Config(
                "simulation.room must contain the robot at the origin".into(),
            ));
        }
        if self
            .obstacles
            .iter()
            .any(|r| r.contains(0.0, 0.0, self.robot_radius))
        {
            return Err(NavError::Config(
                "simulation obstacle overlaps the robot at the origin".into(),
            ));
        }
        Ok(())
    }
}
