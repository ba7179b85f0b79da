//! Hardware-free sonar robot.
//!
//! A unicycle robot in a rectangular room with box obstacles, carrying a
//! ring of sonar beams. Ranges are ray cast against the geometry and
//! perturbed with seeded Gaussian noise; beams that see nothing within the
//! sonar's reach, or randomly drop out, report the "no echo" range.

mod noise;
mod robot;
mod world;

pub use noise::NoiseGenerator;
pub use robot::SimulatedRobot;
pub use world::SimWorld;
