//! Control loop, output and logging sections.

use dhwani_map::WorldPoint;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{NavError, Result};

/// Control loop configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlSection {
    /// Map X of the dead-reckoning origin (world units)
    #[serde(default = "defaults::start_offset")]
    pub start_x: f32,

    /// Map Y of the dead-reckoning origin (world units)
    #[serde(default = "defaults::start_offset")]
    pub start_y: f32,

    /// Cycles before finalizing (0 = until stopped)
    #[serde(default = "defaults::max_cycles")]
    pub max_cycles: u64,

    /// Publish a map snapshot every N cycles (0 = never)
    #[serde(default)]
    pub publish_interval: u64,
}

impl Default for ControlSection {
    fn default() -> Self {
        Self {
            start_x: defaults::start_offset(),
            start_y: defaults::start_offset(),
            max_cycles: defaults::max_cycles(),
            publish_interval: 0,
        }
    }
}

impl ControlSection {
    /// Offset added to every dead-reckoned pose
    pub fn start_offset(&self) -> WorldPoint {
        WorldPoint::new(self.start_x, self.start_y)
    }

    /// Validate section
    pub fn validate(&self) -> Result<()> {
        if !self.start_offset().is_finite() {
            return Err(NavError::Config("control.start_x/start_y must be finite".into()));
        }
        Ok(())
    }
}

/// Map export section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Where the final map is written
    #[serde(default = "defaults::map_path")]
    pub map_path: String,

    /// Characters per value in the dump
    #[serde(default = "defaults::field_width")]
    pub field_width: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            map_path: defaults::map_path(),
            field_width: defaults::field_width(),
        }
    }
}

impl OutputSection {
    /// Validate section
    pub fn validate(&self) -> Result<()> {
        if self.field_width == 0 {
            return Err(NavError::Config("output.field_width must be non-zero".into()));
        }
        if self.map_path.is_empty() {
            return Err(NavError::Config("output.map_path must not be empty".into()));
        }
        Ok(())
    }
}

/// Logging section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}
