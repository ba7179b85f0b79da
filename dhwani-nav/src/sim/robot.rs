//! Simulated sonar robot.

use dhwani_map::RobotPose;
use log::{debug, info};

use super::noise::NoiseGenerator;
use super::world::SimWorld;
use crate::config::SimulationSection;
use crate::error::Result;
use crate::robot::{Actuator, PoseSource, SonarDriver};

/// Wrap an angle into (-180, 180] degrees
fn normalize_deg(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// A unicycle robot with a sonar ring in a [`SimWorld`].
///
/// Pose starts at the origin facing +X and is reported without odometry
/// error. `set_angular_command(d)` sets a heading target `d` degrees from
/// the current heading, approached at a bounded rate. Motion that would
/// put the footprint into a wall or obstacle is cancelled for that step.
pub struct SimulatedRobot {
    world: SimWorld,
    noise: NoiseGenerator,
    angles: Vec<f32>,
    ranges: Vec<f32>,

    x: f32,
    y: f32,
    heading_deg: f32,
    heading_target: f32,
    linear_velocity: f32,

    time_step: f32,
    max_rotation_rate: f32,
    robot_radius: f32,
    sonar_max_range: f32,
    no_echo_range: f32,
    range_noise_stddev: f32,
    dropout_rate: f32,

    steps: u64,
    collisions: u64,
}

impl SimulatedRobot {
    /// Build the robot and take an initial sonar reading.
    pub fn new(section: &SimulationSection) -> Result<Self> {
        section.validate(section.sonar_angles.len())?;

        let mut robot = Self {
            world: SimWorld::from_config(section),
            noise: NoiseGenerator::new(section.seed),
            angles: section.sonar_angles.clone(),
            ranges: vec![section.no_echo_range; section.sonar_angles.len()],
            x: 0.0,
            y: 0.0,
            heading_deg: 0.0,
            heading_target: 0.0,
            linear_velocity: 0.0,
            time_step: section.time_step,
            max_rotation_rate: section.max_rotation_rate,
            robot_radius: section.robot_radius,
            sonar_max_range: section.sonar_max_range,
            no_echo_range: section.no_echo_range,
            range_noise_stddev: section.range_noise_stddev,
            dropout_rate: section.dropout_rate,
            steps: 0,
            collisions: 0,
        };
        robot.scan();

        info!(
            "SimulatedRobot: {} beams, {} obstacles, seed {}",
            robot.angles.len(),
            section.obstacles.len(),
            section.seed
        );
        Ok(robot)
    }

    /// World the robot drives in
    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    /// Current forward velocity command
    pub fn linear_velocity(&self) -> f32 {
        self.linear_velocity
    }

    /// Heading the robot is turning towards
    pub fn heading_target(&self) -> f32 {
        self.heading_target
    }

    /// Time steps simulated
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Steps where motion was blocked
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Move the simulation forward by one time step.
    pub fn advance(&mut self) {
        self.steps += 1;

        let error = normalize_deg(self.heading_target - self.heading_deg);
        let max_turn = self.max_rotation_rate * self.time_step;
        self.heading_deg = normalize_deg(self.heading_deg + error.clamp(-max_turn, max_turn));

        let distance = self.linear_velocity * self.time_step;
        if distance == 0.0 {
            return;
        }
        let (sin, cos) = self.heading_deg.to_radians().sin_cos();
        let next_x = self.x + distance * cos;
        let next_y = self.y + distance * sin;

        if self.world.collides(next_x, next_y, self.robot_radius) {
            self.collisions += 1;
            debug!(
                "SimulatedRobot: blocked at ({:.0}, {:.0}) heading {:.1}",
                self.x, self.y, self.heading_deg
            );
        } else {
            self.x = next_x;
            self.y = next_y;
        }
    }

    /// Ray cast every beam from the current pose.
    fn scan(&mut self) {
        for (beam, &angle) in self.angles.iter().enumerate() {
            let bearing = self.heading_deg + angle;
            let hit = self
                .world
                .ray_cast(self.x, self.y, bearing, self.sonar_max_range);

            self.ranges[beam] = match hit {
                Some(distance) if !self.noise.chance(self.dropout_rate) => {
                    (distance + self.noise.gaussian(self.range_noise_stddev)).max(0.0)
                }
                _ => self.no_echo_range,
            };
        }
    }
}

impl SonarDriver for SimulatedRobot {
    fn refresh(&mut self) -> Result<()> {
        self.advance();
        self.scan();
        Ok(())
    }

    fn beam_count(&self) -> usize {
        self.angles.len()
    }

    fn range(&self, beam: usize) -> f32 {
        self.ranges.get(beam).copied().unwrap_or(self.no_echo_range)
    }

    fn sensor_angle(&self, beam: usize) -> f32 {
        self.angles.get(beam).copied().unwrap_or(0.0)
    }
}

impl PoseSource for SimulatedRobot {
    fn pose(&self) -> RobotPose {
        RobotPose::new(self.x, self.y, self.heading_deg)
    }
}

impl Actuator for SimulatedRobot {
    fn set_linear_velocity(&mut self, velocity: f32) -> Result<()> {
        self.linear_velocity = velocity;
        Ok(())
    }

    fn set_angular_command(&mut self, delta_deg: f32) -> Result<()> {
        self.heading_target = normalize_deg(self.heading_deg + delta_deg);
        Ok(())
    }
}
