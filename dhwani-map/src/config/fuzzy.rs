//! Fuzzy membership parameters for the sonar fan.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

use super::defaults;

/// Shape of the 3x3 fuzzy fan laid over each reading.
///
/// The fan has three radial rings (`range - threshold`, `range`,
/// `range + threshold`) and three rays (`-spread`, `0`, `+spread`).
/// Off-axis rays are attenuated by `cos(spread)`.
///
/// | Ring    | Obstacle (center / flank)     | Empty (center / flank)      |
/// |---------|-------------------------------|-----------------------------|
/// | near    | `obstacle_flank` / `.. * cos` | `empty_near` / `.. * cos`   |
/// | surface | `obstacle_surface` / flank*cos| `0` / `0`                   |
/// | far     | `obstacle_flank` / `.. * cos` | `empty_far` / `empty_far`   |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Radial fuzz half-width (sensor units)
    #[serde(default = "defaults::distance_threshold")]
    pub distance_threshold: f32,

    /// Angular offset of the flank rays (degrees)
    #[serde(default = "defaults::angular_spread_deg")]
    pub angular_spread_deg: f32,

    /// Obstacle confidence at the sensed surface, center ray
    #[serde(default = "defaults::obstacle_surface")]
    pub obstacle_surface: f32,

    /// Obstacle confidence off the surface (and on the flank rays before attenuation)
    #[serde(default = "defaults::obstacle_flank")]
    pub obstacle_flank: f32,

    /// Empty confidence on the near ring, center ray
    #[serde(default = "defaults::empty_near")]
    pub empty_near: f32,

    /// Empty confidence on the far ring
    #[serde(default = "defaults::empty_far")]
    pub empty_far: f32,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            distance_threshold: defaults::distance_threshold(),
            angular_spread_deg: defaults::angular_spread_deg(),
            obstacle_surface: defaults::obstacle_surface(),
            obstacle_flank: defaults::obstacle_flank(),
            empty_near: defaults::empty_near(),
            empty_far: defaults::empty_far(),
        }
    }
}

impl FuzzyConfig {
    /// Validate weights and fan geometry.
    pub fn validate(&self) -> Result<()> {
        if !(self.distance_threshold.is_finite() && self.distance_threshold >= 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "distance_threshold must be finite and non-negative, got {}",
                self.distance_threshold
            )));
        }
        if !(self.angular_spread_deg.is_finite() && (0.0..90.0).contains(&self.angular_spread_deg))
        {
            return Err(MapError::InvalidConfig(format!(
                "angular_spread_deg must be in [0, 90), got {}",
                self.angular_spread_deg
            )));
        }

        let weights = [
            ("obstacle_surface", self.obstacle_surface),
            ("obstacle_flank", self.obstacle_flank),
            ("empty_near", self.empty_near),
            ("empty_far", self.empty_far),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(MapError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
