//! Map configuration.
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridConfig`] | Grid dimensions, cell size, origin bias |
//! | [`FuzzyConfig`] | Radial threshold, angular spread, membership weights |
//!
//! Both sections deserialize from TOML with every field defaulted, so the
//! navigation crate can embed them directly as `[grid]` and `[fuzzy]`.

mod defaults;
mod fuzzy;
mod grid;

pub use fuzzy::FuzzyConfig;
pub use grid::{GridConfig, MAX_CELLS};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything the mapping core needs at construction time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid section
    #[serde(default)]
    pub grid: GridConfig,

    /// Fuzzy projection section
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
}

impl MapConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.fuzzy.validate()
    }
}
