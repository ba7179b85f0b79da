//! Core types shared by the projector, the accumulator and the control loop.
//!
//! All world quantities are in sensor units (millimetres for a Pioneer-class
//! sonar ring) and all angles at this boundary are in degrees, matching the
//! robot driver's convention.
//!
//! - [`GridCoord`]: Integer cell indices (may be out of range until checked)
//! - [`WorldPoint`]: Floating-point world coordinates
//! - [`RobotPose`]: Dead-reckoned position and heading
//! - [`RangeSample`]: One sonar beam reading
//! - [`RangeBand`]: The open interval of trustworthy ranges

mod point;
mod pose;
mod sample;

pub use point::{GridCoord, WorldPoint};
pub use pose::RobotPose;
pub use sample::{RangeBand, RangeSample};
