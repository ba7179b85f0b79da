//! Configuration loading for DhwaniNav.
//!
//! One TOML file, every field defaulted; an empty file is a valid
//! configuration.
//!
//! | Section | Description |
//! |---------|-------------|
//! | `[grid]` | Grid dimensions, cell size, origin bias |
//! | `[fuzzy]` | Fuzzy fan shape and membership weights |
//! | [`SensorSection`] | Beam count and valid range band |
//! | [`AvoidanceSection`] | Thresholds, speeds, beam clusters |
//! | [`ControlSection`] | Start offset, cycle budget, snapshot interval |
//! | [`OutputSection`] | Map path and field width |
//! | [`LoggingSection`] | Default log filter |
//! | [`SimulationSection`] | Simulated room, obstacles, noise |
//!
//! ## Example TOML
//!
//! ```toml
//! [grid]
//! width = 160
//! height = 160
//! cell_size = 100.0
//!
//! [avoidance]
//! near_threshold = 800.0
//! rounding = "nearest"
//!
//! [control]
//! start_x = 8000.0
//! start_y = 8000.0
//! max_cycles = 3000
//! ```

mod avoidance;
mod control;
mod defaults;
mod sensor;
mod simulation;

pub use avoidance::{AvoidanceSection, BeamLayout, Rounding};
pub use control::{ControlSection, LoggingSection, OutputSection};
pub use sensor::SensorSection;
pub use simulation::{Rect, SimulationSection};

use std::path::Path;

use dhwani_map::{FuzzyConfig, GridConfig, MapConfig};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{NavError, Result};

/// Main configuration structure
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Grid dimensions
    #[serde(default)]
    pub grid: GridConfig,

    /// Fuzzy projection
    #[serde(default)]
    pub fuzzy: FuzzyConfig,

    /// Sonar ring
    #[serde(default)]
    pub sensor: SensorSection,

    /// Reactive avoidance
    #[serde(default)]
    pub avoidance: AvoidanceSection,

    /// Control loop
    #[serde(default)]
    pub control: ControlSection,

    /// Map export
    #[serde(default)]
    pub output: OutputSection,

    /// Logging
    #[serde(default)]
    pub logging: LoggingSection,

    /// Simulated robot
    #[serde(default)]
    pub simulation: SimulationSection,
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::load(path)
        } else {
            info!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Mapping core configuration
    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            grid: self.grid.clone(),
            fuzzy: self.fuzzy.clone(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.map_config().validate()?;
        self.sensor.validate()?;
        self.avoidance.validate(self.sensor.beam_count)?;
        self.control.validate()?;
        self.output.validate()?;
        self.simulation.validate(self.sensor.beam_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = NavConfig::from_toml("").unwrap();
        assert_eq!(config, NavConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_reference_robot() {
        let config = NavConfig::default();
        assert_eq!(config.grid.width, 160);
        assert_eq!(config.grid.cell_size, 100.0);
        assert_eq!(config.fuzzy.distance_threshold, 10.0);
        assert_eq!(config.sensor.beam_count, 16);
        assert_eq!(config.avoidance.near_threshold, 800.0);
        assert_eq!(config.avoidance.beams.front, vec![3, 4]);
        assert_eq!(config.control.max_cycles, 300_000);
        assert_eq!(config.output.map_path, "robot_map.dat");
        assert_eq!(config.output.field_width, 4);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let text = include_str!("../../../configs/dhwani.toml");
        let config = NavConfig::from_toml(text).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = NavConfig::from_toml(
            r#"
            [grid]
            width = 80

            [avoidance]
            rounding = "truncate"

            [avoidance.beams]
            front = [2, 3]

            [control]
            max_cycles = 10
            publish_interval = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.width, 80);
        assert_eq!(config.grid.height, 160);
        assert_eq!(config.avoidance.rounding, Rounding::Truncate);
        assert_eq!(config.avoidance.beams.front, vec![2, 3]);
        assert_eq!(config.avoidance.beams.left, vec![0]);
        assert_eq!(config.control.max_cycles, 10);
        assert_eq!(config.control.publish_interval, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_obstacles_from_toml() {
        let config = NavConfig::from_toml(
            r#"
            [simulation.room]
            min_x = -1000.0
            min_y = -1000.0
            max_x = 1000.0
            max_y = 1000.0

            [[simulation.obstacles]]
            min_x = 500.0
            min_y = -100.0
            max_x = 600.0
            max_y = 100.0
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.obstacles.len(), 1);
        assert_eq!(config.simulation.room.max_x, 1000.0);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let result = NavConfig::from_toml("[grid]\nwidth = \"wide\"\n");
        assert!(matches!(result, Err(NavError::Config(_))));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = NavConfig::default();
        config.grid.width = 0;
        assert!(matches!(config.validate(), Err(NavError::Map(_))));

        let mut config = NavConfig::default();
        config.sensor.min_valid_range = 5000.0;
        assert!(matches!(config.validate(), Err(NavError::Config(_))));

        let mut config = NavConfig::default();
        config.output.field_width = 0;
        assert!(config.validate().is_err());

        let mut config = NavConfig::default();
        config.fuzzy.empty_near = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = NavConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dhwani.toml");
        std::fs::write(&path, "[output]\nmap_path = \"out.dat\"\n").unwrap();

        let config = NavConfig::load(&path).unwrap();
        assert_eq!(config.output.map_path, "out.dat");
        assert!(NavConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
