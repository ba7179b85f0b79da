//! Sonar ring section.

use dhwani_map::RangeBand;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{NavError, Result};

/// Sonar ring configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorSection {
    /// Number of beams on the ring
    #[serde(default = "defaults::beam_count")]
    pub beam_count: usize,

    /// Readings at or below this are skipped (sensor units)
    #[serde(default = "defaults::min_valid_range")]
    pub min_valid_range: f32,

    /// Readings at or above this are skipped (sensor units)
    #[serde(default = "defaults::max_valid_range")]
    pub max_valid_range: f32,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            beam_count: defaults::beam_count(),
            min_valid_range: defaults::min_valid_range(),
            max_valid_range: defaults::max_valid_range(),
        }
    }
}

impl SensorSection {
    /// Valid-range band used for both mapping and avoidance
    pub fn range_band(&self) -> RangeBand {
        RangeBand::new(self.min_valid_range, self.max_valid_range)
    }

    /// Validate section
    pub fn validate(&self) -> Result<()> {
        if self.beam_count == 0 {
            return Err(NavError::Config("sensor.beam_count must be non-zero".into()));
        }
        if !(self.min_valid_range.is_finite() && self.max_valid_range.is_finite())
            || self.min_valid_range < 0.0
            || self.min_valid_range >= self.max_valid_range
        {
            return Err(NavError::Config(format!(
                "sensor valid range ({}, {}) is empty or inverted",
                self.min_valid_range, self.max_valid_range
            )));
        }
        Ok(())
    }
}
