//! Per-cycle and per-run diagnostics.

use dhwani_map::{GlobalMap, MapCoverage, MapError, MergeStats, RobotPose};

use crate::avoidance::AvoidanceCommand;

/// What happened in one cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleReport {
    /// 1-based cycle number
    pub cycle: u64,
    /// Pose used for projection (start offset applied)
    pub pose: RobotPose,
    /// Beams projected into the grid
    pub samples_used: usize,
    /// Beams skipped as out of band or degenerate
    pub beams_skipped: usize,
    /// Merge outcome
    pub merge: MergeStats,
    /// Command sent to the actuator
    pub command: AvoidanceCommand,
    /// Actuator calls that failed this cycle
    pub actuator_failures: usize,
}

/// Why the loop ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Stop signal raised
    Signal,
    /// `max_cycles` reached
    CycleBudget,
}

/// Totals for a finished run plus the final map
#[derive(Debug)]
pub struct RunSummary {
    /// Cycles executed
    pub cycles: u64,
    /// Beams projected over the run
    pub samples_used: u64,
    /// Beams skipped over the run
    pub beams_skipped: u64,
    /// Summed merge counts
    pub merge: MergeStats,
    /// Failed actuator calls over the run, final stop included
    pub actuator_failures: u64,
    /// Why the loop ended
    pub stop_reason: StopReason,
    /// Evidence coverage at shutdown
    pub coverage: MapCoverage,
    /// Final composed map
    pub map: GlobalMap,
    /// Set when the map could not be written to the export path
    pub export_error: Option<MapError>,
}

/// Running totals while the loop is active
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RunTotals {
    pub cycles: u64,
    pub samples_used: u64,
    pub beams_skipped: u64,
    pub merge: MergeStats,
    pub actuator_failures: u64,
}

impl RunTotals {
    pub fn record(&mut self, report: &CycleReport) {
        self.cycles = report.cycle;
        self.samples_used += report.samples_used as u64;
        self.beams_skipped += report.beams_skipped as u64;
        self.merge.accumulate(&report.merge);
        self.actuator_failures += report.actuator_failures as u64;
    }
}
