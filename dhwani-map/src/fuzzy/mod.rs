//! Fuzzy sonar projection.
//!
//! A single sonar reading is spread across a 3x3 fan of cells (three rays
//! by three depth rings) with confidences taken from a [`MembershipTable`].
//! [`FuzzyCellProjector::project`] returns the fan as a lazy [`FuzzyFan`];
//! [`FuzzyCellProjector::project_into`] appends it to a [`DirtySet`] for the
//! accumulator to merge.

mod dirty;
mod membership;
mod projector;

pub use dirty::{CellVote, DirtySet};
pub use membership::{MembershipTable, Ray, Ring};
pub use projector::{FAN_SIZE, FanIter, FuzzyCellProjector, FuzzyFan, FuzzyVote};
