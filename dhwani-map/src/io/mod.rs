//! Map persistence.
//!
//! The occupancy map is exported as a plain-text `.dat` grid: one line per
//! `x` index, `height` values per line, each right-aligned in a fixed field
//! and followed by a single space. There is no header; readers must know
//! the dimensions.
//!
//! ```rust,ignore
//! use dhwani_map::io::{save_global_map, load_global_map};
//! use std::path::Path;
//!
//! save_global_map(Path::new("robot_map.dat"), &map, 4)?;
//! let map = load_global_map(Path::new("robot_map.dat"), 160, 160)?;
//! ```

mod dat;

pub use dat::{load_global_map, read_global_map, save_global_map, write_global_map};
