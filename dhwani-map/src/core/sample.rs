//! Sonar range samples and the band of ranges worth trusting.

use serde::{Deserialize, Serialize};

/// One sonar beam reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeSample {
    /// Beam index on the sonar ring
    pub beam: usize,
    /// Measured range in sensor units
    pub range: f32,
    /// Beam angle relative to the robot heading (degrees)
    pub angle_deg: f32,
}

impl RangeSample {
    /// Create a new sample
    #[inline]
    pub fn new(beam: usize, range: f32, angle_deg: f32) -> Self {
        Self {
            beam,
            range,
            angle_deg,
        }
    }
}

/// Open interval `(min, max)` of ranges accepted for mapping and avoidance.
///
/// Sonar returns below `min` are ringing/crosstalk and returns at or above
/// `max` are "no echo"; both are skipped for the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeBand {
    /// Exclusive lower bound
    pub min: f32,
    /// Exclusive upper bound
    pub max: f32,
}

impl Default for RangeBand {
    fn default() -> Self {
        Self {
            min: 200.0,
            max: 4500.0,
        }
    }
}

impl RangeBand {
    /// Create a new band
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Strictly inside the band (NaN is never inside)
    #[inline]
    pub fn contains(&self, range: f32) -> bool {
        range > self.min && range < self.max
    }

    /// Is this sample usable this cycle?
    #[inline]
    pub fn accepts(&self, sample: &RangeSample) -> bool {
        self.contains(sample.range) && sample.angle_deg.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_open_interval() {
        let band = RangeBand::default();
        assert!(!band.contains(200.0));
        assert!(band.contains(200.5));
        assert!(band.contains(4499.0));
        assert!(!band.contains(4500.0));
        assert!(!band.contains(5000.0));
        assert!(!band.contains(0.0));
        assert!(!band.contains(f32::NAN));
    }

    #[test]
    fn test_accepts_rejects_bad_angle() {
        let band = RangeBand::default();
        assert!(band.accepts(&RangeSample::new(3, 1000.0, 10.0)));
        assert!(!band.accepts(&RangeSample::new(3, 1000.0, f32::NAN)));
    }
}
