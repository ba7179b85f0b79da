//! Reactive avoidance section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{NavError, Result};

/// How the proportional slow-down speed is rounded before it is sent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Send the exact quotient
    #[default]
    None,
    /// Round half away from zero
    Nearest,
    /// Drop the fractional part
    Truncate,
}

impl Rounding {
    /// Apply the rounding mode
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Rounding::None => value,
            Rounding::Nearest => value.round(),
            Rounding::Truncate => value.trunc(),
        }
    }
}

/// Which sonar beams feed each avoidance cluster.
///
/// The left cluster is `left + front_left`, the right cluster is
/// `right + front_right`. The slow-down speed is taken from the
/// front-diagonal beams only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamLayout {
    /// Side-facing left beams
    #[serde(default = "defaults::left_beams")]
    pub left: Vec<usize>,

    /// Front-left diagonal beams
    #[serde(default = "defaults::front_left_beams")]
    pub front_left: Vec<usize>,

    /// Forward beams
    #[serde(default = "defaults::front_beams")]
    pub front: Vec<usize>,

    /// Front-right diagonal beams
    #[serde(default = "defaults::front_right_beams")]
    pub front_right: Vec<usize>,

    /// Side-facing right beams
    #[serde(default = "defaults::right_beams")]
    pub right: Vec<usize>,
}

impl Default for BeamLayout {
    fn default() -> Self {
        Self {
            left: defaults::left_beams(),
            front_left: defaults::front_left_beams(),
            front: defaults::front_beams(),
            front_right: defaults::front_right_beams(),
            right: defaults::right_beams(),
        }
    }
}

impl BeamLayout {
    fn groups(&self) -> [(&'static str, &[usize]); 5] {
        [
            ("left", self.left.as_slice()),
            ("front_left", self.front_left.as_slice()),
            ("front", self.front.as_slice()),
            ("front_right", self.front_right.as_slice()),
            ("right", self.right.as_slice()),
        ]
    }
}

/// Reactive avoidance configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceSection {
    /// Readings below this count as an obstacle (sensor units)
    #[serde(default = "defaults::near_threshold")]
    pub near_threshold: f32,

    /// Heading change per cycle while turning (degrees)
    #[serde(default = "defaults::turn_rate")]
    pub turn_rate: f32,

    /// Forward speed with nothing in range
    #[serde(default = "defaults::cruise_speed")]
    pub cruise_speed: f32,

    /// Speed while backing out of a blocked front
    #[serde(default = "defaults::reverse_speed")]
    pub reverse_speed: f32,

    /// Subtracted from the nearest reading before scaling
    #[serde(default = "defaults::slowdown_offset")]
    pub slowdown_offset: f32,

    /// Divides the offset reading to get the turning speed
    #[serde(default = "defaults::slowdown_divisor")]
    pub slowdown_divisor: f32,

    /// Rounding of the turning speed
    #[serde(default)]
    pub rounding: Rounding,

    /// Beam clusters
    #[serde(default)]
    pub beams: BeamLayout,
}

impl Default for AvoidanceSection {
    fn default() -> Self {
        Self {
            near_threshold: defaults::near_threshold(),
            turn_rate: defaults::turn_rate(),
            cruise_speed: defaults::cruise_speed(),
            reverse_speed: defaults::reverse_speed(),
            slowdown_offset: defaults::slowdown_offset(),
            slowdown_divisor: defaults::slowdown_divisor(),
            rounding: Rounding::default(),
            beams: BeamLayout::default(),
        }
    }
}

impl AvoidanceSection {
    /// Validate against the ring size
    pub fn validate(&self, beam_count: usize) -> Result<()> {
        let scalars = [
            ("near_threshold", self.near_threshold),
            ("turn_rate", self.turn_rate),
            ("cruise_speed", self.cruise_speed),
            ("reverse_speed", self.reverse_speed),
            ("slowdown_offset", self.slowdown_offset),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(NavError::Config(format!("avoidance.{name} must be finite")));
            }
        }
        if !(self.slowdown_divisor.is_finite() && self.slowdown_divisor > 0.0) {
            return Err(NavError::Config(format!(
                "avoidance.slowdown_divisor must be positive, got {}",
                self.slowdown_divisor
            )));
        }
        for (name, beams) in self.beams.groups() {
            if let Some(&beam) = beams.iter().find(|&&b| b >= beam_count) {
                return Err(NavError::Config(format!(
                    "avoidance.beams.{name} references beam {beam}, ring has {beam_count}"
                )));
            }
        }
        if self.beams.front.is_empty() {
            return Err(NavError::Config("avoidance.beams.front must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_modes() {
        let v = 550.0 / 6.0;
        assert_eq!(Rounding::None.apply(v), v);
        assert_eq!(Rounding::Nearest.apply(v), 92.0);
        assert_eq!(Rounding::Truncate.apply(v), 91.0);
        assert_eq!(Rounding::Truncate.apply(-2.5), -2.0);
    }

    #[test]
    fn test_rejects_beam_outside_ring() {
        let mut section = AvoidanceSection::default();
        assert!(section.validate(16).is_ok());
        assert!(section.validate(7).is_err());

        section.beams.front = vec![];
        assert!(section.validate(16).is_err());
    }

    #[test]
    fn test_rejects_non_positive_divisor() {
        let section = AvoidanceSection {
            slowdown_divisor: 0.0,
            ..Default::default()
        };
        assert!(matches!(section.validate(16), Err(NavError::Config(_))));
    }
}
