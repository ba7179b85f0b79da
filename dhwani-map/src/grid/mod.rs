//! Evidence grid storage.
//!
//! Two [`EvidenceGrid`]s make up a map pass:
//!
//! ```text
//! obstacle evidence   starts at 0.0, only ever raised (max)
//! empty evidence      starts at 1.0, only ever lowered (min)
//! ```
//!
//! [`CellGeometry`] converts world coordinates to cell indices; the grid
//! itself decides whether an index is inside.

mod evidence;
mod geometry;

pub use evidence::EvidenceGrid;
pub use geometry::CellGeometry;
