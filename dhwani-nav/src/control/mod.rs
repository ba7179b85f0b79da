//! Control loop: sensing, mapping, avoidance and shutdown.

mod cycle;
mod report;
mod shared;
mod signal;

pub use cycle::{ControlLoop, MapExport};
pub use report::{CycleReport, RunSummary, StopReason};
pub use shared::{SharedMap, publish, shared_map};
pub use signal::StopSignal;
