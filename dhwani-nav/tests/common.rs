//! Test utilities for DhwaniNav integration tests.
//!
//! Provides a scripted robot with fixed readings and a recorded command log.

#![allow(dead_code)]

use std::collections::VecDeque;

use dhwani_map::RobotPose;
use dhwani_nav::{Actuator, NavConfig, NavError, PoseSource, Result, SonarDriver};

/// Pioneer sonar ring layout (degrees)
pub const PIONEER_ANGLES: [f32; 16] = [
    90.0, 50.0, 30.0, 10.0, -10.0, -30.0, -50.0, -90.0, -90.0, -130.0, -150.0, -170.0, 170.0,
    150.0, 130.0, 90.0,
];

/// "No echo" reading, outside the valid band
pub const NO_ECHO: f32 = 5000.0;

/// One actuator call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Call {
    Linear(f32),
    Angular(f32),
}

/// Robot with scripted readings that records every command.
pub struct ScriptedRobot {
    /// Current readings, one per beam
    pub ranges: Vec<f32>,
    /// Beam angles
    pub angles: Vec<f32>,
    /// Dead-reckoned pose
    pub pose: RobotPose,
    /// Readings to load on successive refreshes
    pub script: VecDeque<Vec<f32>>,
    /// Every actuator call, in order
    pub calls: Vec<Call>,
    /// Refresh count
    pub refreshes: u64,
    /// Reject every command
    pub fail_actuator: bool,
    /// Fail every refresh
    pub fail_refresh: bool,
}

impl ScriptedRobot {
    /// Pioneer ring with every beam reading `range`
    pub fn uniform(range: f32) -> Self {
        Self::with_ranges(vec![range; 16])
    }

    /// Pioneer ring with explicit readings
    pub fn with_ranges(ranges: Vec<f32>) -> Self {
        Self {
            ranges,
            angles: PIONEER_ANGLES.to_vec(),
            pose: RobotPose::default(),
            script: VecDeque::new(),
            calls: Vec::new(),
            refreshes: 0,
            fail_actuator: false,
            fail_refresh: false,
        }
    }

    /// Set individual beams
    pub fn set(mut self, beams: &[(usize, f32)]) -> Self {
        for &(beam, range) in beams {
            self.ranges[beam] = range;
        }
        self
    }

    /// Last (linear, angular) pair sent
    pub fn last_command(&self) -> Option<(f32, f32)> {
        match self.calls.as_slice() {
            [.., Call::Linear(v), Call::Angular(w)] => Some((*v, *w)),
            _ => None,
        }
    }
}

impl SonarDriver for ScriptedRobot {
    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        if self.fail_refresh {
            return Err(NavError::Io(std::io::Error::other("sonar offline")));
        }
        if let Some(next) = self.script.pop_front() {
            self.ranges = next;
        }
        Ok(())
    }

    fn beam_count(&self) -> usize {
        self.ranges.len()
    }

    fn range(&self, beam: usize) -> f32 {
        self.ranges[beam]
    }

    fn sensor_angle(&self, beam: usize) -> f32 {
        self.angles[beam]
    }
}

impl PoseSource for ScriptedRobot {
    fn pose(&self) -> RobotPose {
        self.pose
    }
}

impl Actuator for ScriptedRobot {
    fn set_linear_velocity(&mut self, velocity: f32) -> Result<()> {
        self.calls.push(Call::Linear(velocity));
        if self.fail_actuator {
            return Err(NavError::Actuator("motor controller timeout".into()));
        }
        Ok(())
    }

    fn set_angular_command(&mut self, delta_deg: f32) -> Result<()> {
        self.calls.push(Call::Angular(delta_deg));
        if self.fail_actuator {
            return Err(NavError::Actuator("motor controller timeout".into()));
        }
        Ok(())
    }
}

/// Default configuration with a cycle budget
pub fn config_with_cycles(max_cycles: u64) -> NavConfig {
    let mut config = NavConfig::default();
    config.control.max_cycles = max_cycles;
    config
}
