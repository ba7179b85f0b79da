//! Robot collaborator interfaces.
//!
//! The control loop never talks to hardware directly. It reads ranges
//! through [`SonarDriver`], dead-reckoned pose through [`PoseSource`], and
//! sends commands through [`Actuator`]. One robot object usually implements
//! all three.
//!
//! | Trait | Consumed | Units |
//! |-------|----------|-------|
//! | [`SonarDriver`] | per-beam range and mounting angle | sensor units, degrees |
//! | [`PoseSource`] | x, y, heading | world units, degrees |
//! | [`Actuator`] | linear velocity, heading delta | units/s, degrees |

use dhwani_map::{RangeSample, RobotPose};

use crate::error::Result;

/// Per-beam range readings from a sonar ring
pub trait SonarDriver {
    /// Pull a fresh set of readings. Called once at the start of every cycle.
    fn refresh(&mut self) -> Result<()> {
        Ok(())
    }

    /// Number of beams on the ring
    fn beam_count(&self) -> usize;

    /// Latest range for a beam
    fn range(&self, beam: usize) -> f32;

    /// Mounting angle of a beam relative to the robot heading (degrees)
    fn sensor_angle(&self, beam: usize) -> f32;

    /// All beams as samples, in beam order
    fn samples(&self) -> Vec<RangeSample> {
        (0..self.beam_count())
            .map(|beam| RangeSample::new(beam, self.range(beam), self.sensor_angle(beam)))
            .collect()
    }
}

/// Dead-reckoned robot pose
pub trait PoseSource {
    /// Current pose, heading in degrees
    fn pose(&self) -> RobotPose;
}

/// Motion command sink.
///
/// Commands are fire-and-forget; implementations must not block until the
/// motion completes.
pub trait Actuator {
    /// Set forward velocity (negative reverses)
    fn set_linear_velocity(&mut self, velocity: f32) -> Result<()>;

    /// Set the heading change to steer towards (degrees, CCW positive)
    fn set_angular_command(&mut self, delta_deg: f32) -> Result<()>;
}
