//! # DhwaniNav
//!
//! Sonar mapping and reactive obstacle avoidance for a differential-drive
//! robot with a ring of range sensors.
//!
//! ## Architecture
//!
//! A single synchronous [`ControlLoop`] owns the mapping core from
//! `dhwani-map` and a stateless [`ReactiveAvoidance`] policy. The robot is
//! reached only through three traits ([`SonarDriver`], [`PoseSource`],
//! [`Actuator`]); [`SimulatedRobot`] implements all of them without
//! hardware.
//!
//! ```text
//!   SonarDriver ──┬──> FuzzyCellProjector ──> OccupancyAccumulator
//!   PoseSource  ──┘                                  │
//!                                                    └─(shutdown)─> .dat
//!   SonarDriver ─────> ReactiveAvoidance ──> Actuator
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dhwani_nav::{ControlLoop, NavConfig, SimulatedRobot, StopSignal};
//!
//! let config = NavConfig::default();
//! let robot = SimulatedRobot::new(&config.simulation)?;
//! let mut control = ControlLoop::new(&config, robot)?
//!     .with_export(&config.output.map_path, config.output.field_width);
//!
//! let summary = control.run(&StopSignal::install_ctrl_c()?)?;
//! println!("{} occupied cells", summary.map.occupied_count());
//! ```

#![warn(missing_docs)]

pub mod avoidance;
pub mod config;
pub mod control;
pub mod error;
pub mod robot;
pub mod sim;

pub use avoidance::{AvoidanceCommand, ClusterState, Maneuver, ReactiveAvoidance};
pub use config::NavConfig;
pub use control::{
    ControlLoop, CycleReport, RunSummary, SharedMap, StopReason, StopSignal, shared_map,
};
pub use error::{NavError, Result};
pub use robot::{Actuator, PoseSource, SonarDriver};
pub use sim::SimulatedRobot;
