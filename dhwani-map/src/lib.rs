//! # DhwaniMap
//!
//! Fuzzy sonar occupancy mapping.
//!
//! ## Overview
//!
//! Each sonar reading is spread over a 3x3 fan of cells (three rays by
//! three depth rings) and fused into two evidence grids:
//!
//! - **Obstacle evidence** - starts at 0, raised with `max`
//! - **Empty evidence** - starts at 1, lowered with `min`
//!
//! Once sensing ends the two grids are composed into a ternary map: a cell
//! is occupied when it has obstacle evidence and its empty evidence has been
//! fully retracted.
//!
//! ```text
//! RangeSample + RobotPose
//!         |
//!         v
//! FuzzyCellProjector --(9 votes)--> DirtySet
//!                                      |
//!                                      v
//!                          OccupancyAccumulator (max / min)
//!                                      |
//!                                      v  (at shutdown)
//!                                 compose() -> GlobalMap -> .dat
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dhwani_map::{DirtySet, FuzzyCellProjector, MapConfig, OccupancyAccumulator};
//! use dhwani_map::{RangeSample, RobotPose};
//!
//! let config = MapConfig::default();
//! let projector = FuzzyCellProjector::from_config(&config)?;
//! let mut accumulator = OccupancyAccumulator::new(&config.grid)?;
//! let mut dirty = DirtySet::new();
//!
//! let pose = RobotPose::new(8000.0, 8000.0, 0.0);
//! projector.project_into(&pose, &RangeSample::new(3, 1200.0, 10.0), &mut dirty)?;
//! let stats = accumulator.merge(&mut dirty);
//!
//! let map = accumulator.compose()?;
//! ```
//!
//! ## Coordinate System
//!
//! - X: first map index, one `.dat` line per value
//! - Y: second map index, one `.dat` column per value
//! - Heading and beam angles: degrees, CCW positive from +X

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Grid and fuzzy configuration
pub mod config;

// Evidence grid storage
pub mod grid;

// Fuzzy projection
pub mod fuzzy;

// Evidence fusion
pub mod accumulator;

// Ternary map composition
pub mod compositor;

// Persistence
pub mod io;

pub use accumulator::{EvidenceSnapshot, MapCoverage, MergeStats, OccupancyAccumulator};
pub use compositor::{GlobalMap, compose};
pub use config::{FuzzyConfig, GridConfig, MapConfig};
pub use crate::core::{GridCoord, RangeBand, RangeSample, RobotPose, WorldPoint};
pub use error::{MapError, Result};
pub use fuzzy::{CellVote, DirtySet, FAN_SIZE, FuzzyCellProjector, FuzzyFan, FuzzyVote};
pub use grid::{CellGeometry, EvidenceGrid};
