//! The sensing and avoidance cycle.
//!
//! One cycle, single-threaded and without sleeping:
//!
//! ```text
//! refresh sonar -> read pose (+ start offset)
//!      |
//!      +--> in-band beams -> project -> DirtySet -> merge
//!      |
//!      +--> all readings  -> ReactiveAvoidance -> actuator
//!      |
//!      +--> every N cycles: compose -> SharedMap
//! ```
//!
//! The loop ends on the stop signal or the cycle budget. Either way it
//! sends one zero-velocity command, composes the map exactly once and
//! exports it.

use std::path::PathBuf;

use dhwani_map::io::save_global_map;
use dhwani_map::{
    DirtySet, FuzzyCellProjector, OccupancyAccumulator, RangeBand, RangeSample, WorldPoint,
};
use log::{debug, info, trace, warn};

use super::report::{CycleReport, RunSummary, RunTotals, StopReason};
use super::shared::{SharedMap, publish};
use super::signal::StopSignal;
use crate::avoidance::ReactiveAvoidance;
use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::robot::{Actuator, PoseSource, SonarDriver};

/// Where the final map is written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapExport {
    /// Output file
    pub path: PathBuf,
    /// Characters per value
    pub field_width: usize,
}

/// Drives mapping and avoidance for one robot.
pub struct ControlLoop<R> {
    robot: R,
    projector: FuzzyCellProjector,
    accumulator: OccupancyAccumulator,
    avoidance: ReactiveAvoidance,
    dirty: DirtySet,
    readings: Vec<f32>,
    band: RangeBand,
    start_offset: WorldPoint,
    max_cycles: u64,
    publish_interval: u64,
    shared: Option<SharedMap>,
    export: Option<MapExport>,
    totals: RunTotals,
    finalized: bool,
}

impl<R> ControlLoop<R>
where
    R: SonarDriver + PoseSource + Actuator,
{
    /// Build the loop, allocating both evidence grids.
    ///
    /// Fails on an invalid grid, fuzzy, sensor, avoidance or control section.
    pub fn new(config: &NavConfig, robot: R) -> Result<Self> {
        let map_config = config.map_config();
        let projector = FuzzyCellProjector::from_config(&map_config)?;
        let accumulator = OccupancyAccumulator::new(&map_config.grid)?;
        let avoidance = ReactiveAvoidance::from_config(config)?;
        config.control.validate()?;

        let beams = config.sensor.beam_count;
        info!(
            "ControlLoop: {}x{} grid, cell size {}, {} beams, band ({}, {})",
            map_config.grid.width,
            map_config.grid.height,
            map_config.grid.cell_size,
            beams,
            config.sensor.min_valid_range,
            config.sensor.max_valid_range
        );

        Ok(Self {
            robot,
            projector,
            accumulator,
            avoidance,
            dirty: DirtySet::with_beam_capacity(beams),
            readings: Vec::with_capacity(beams),
            band: config.sensor.range_band(),
            start_offset: config.control.start_offset(),
            max_cycles: config.control.max_cycles,
            publish_interval: config.control.publish_interval,
            shared: None,
            export: None,
            totals: RunTotals::default(),
            finalized: false,
        })
    }

    /// Publish snapshots (and the final map) to `shared`
    pub fn with_shared_map(mut self, shared: SharedMap) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Write the final map to `path` on shutdown
    pub fn with_export(mut self, path: impl Into<PathBuf>, field_width: usize) -> Self {
        self.export = Some(MapExport {
            path: path.into(),
            field_width,
        });
        self
    }

    /// The robot being driven
    pub fn robot(&self) -> &R {
        &self.robot
    }

    /// Mutable access to the robot
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// Give the robot back
    pub fn into_robot(self) -> R {
        self.robot
    }

    /// Evidence accumulated so far
    pub fn accumulator(&self) -> &OccupancyAccumulator {
        &self.accumulator
    }

    /// Cycles executed so far
    pub fn cycles(&self) -> u64 {
        self.totals.cycles
    }

    /// Has the final map been composed?
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Run one cycle.
    ///
    /// Fails with [`NavError::AlreadyFinalized`] once the final map has been
    /// composed; the grids and the actuator are left untouched.
    pub fn step(&mut self) -> Result<CycleReport> {
        if self.finalized {
            return Err(NavError::AlreadyFinalized);
        }
        let cycle = self.totals.cycles + 1;

        if let Err(e) = self.robot.refresh() {
            warn!("ControlLoop: sonar refresh failed, using previous readings: {}", e);
        }
        let pose = self.robot.pose().translated(self.start_offset);

        self.readings.clear();
        let mut samples_used = 0;
        let mut beams_skipped = 0;
        for beam in 0..self.robot.beam_count() {
            let sample = RangeSample::new(beam, self.robot.range(beam), self.robot.sensor_angle(beam));
            self.readings.push(sample.range);

            if !self.band.accepts(&sample) {
                trace!("ControlLoop: beam {} out of band ({})", beam, sample.range);
                beams_skipped += 1;
                continue;
            }
            match self.projector.project_into(&pose, &sample, &mut self.dirty) {
                Ok(_) => samples_used += 1,
                Err(e) => {
                    trace!("ControlLoop: beam {} skipped: {}", beam, e);
                    beams_skipped += 1;
                }
            }
        }

        let merge = self.accumulator.merge(&mut self.dirty);

        let command = self.avoidance.decide(&self.readings);
        let actuator_failures = self.send(command.linear_velocity, command.angular_command);

        if self.publish_interval > 0 && cycle % self.publish_interval == 0 {
            self.publish_snapshot();
        }

        let report = CycleReport {
            cycle,
            pose,
            samples_used,
            beams_skipped,
            merge,
            command,
            actuator_failures,
        };
        self.totals.record(&report);

        debug!(
            "ControlLoop: cycle {} pose ({:.0}, {:.0}, {:.1}) used {} skipped {} votes {}/{} dropped {} -> {:?} v={:.2} w={:.1}",
            cycle,
            pose.x,
            pose.y,
            pose.heading_deg,
            samples_used,
            beams_skipped,
            merge.obstacle_votes,
            merge.empty_votes,
            merge.votes_dropped,
            command.maneuver,
            command.linear_velocity,
            command.angular_command
        );

        Ok(report)
    }

    /// Cycle until stopped or out of budget, then finalize.
    pub fn run(&mut self, stop: &StopSignal) -> Result<RunSummary> {
        if self.finalized {
            return Err(NavError::AlreadyFinalized);
        }

        if self.max_cycles == 0 {
            info!("ControlLoop: running until stopped");
        } else {
            info!("ControlLoop: running for up to {} cycles", self.max_cycles);
        }

        let reason = loop {
            if stop.is_stopped() {
                break StopReason::Signal;
            }
            if self.max_cycles != 0 && self.totals.cycles >= self.max_cycles {
                break StopReason::CycleBudget;
            }
            self.step()?;
        };

        self.finalize(reason)
    }

    /// Stop the robot, compose once, export.
    ///
    /// An export failure is reported in the summary rather than returned, so
    /// the composed map survives it.
    fn finalize(&mut self, reason: StopReason) -> Result<RunSummary> {
        self.finalized = true;
        info!(
            "ControlLoop: finalizing after {} cycles ({:?})",
            self.totals.cycles, reason
        );

        let failures = self.send(0.0, 0.0);
        self.totals.actuator_failures += failures as u64;

        let map = self.accumulator.compose()?;
        let coverage = self.accumulator.coverage();

        if let Some(shared) = &self.shared {
            publish(shared, map.clone());
        }
        let export_error = match &self.export {
            Some(export) => match save_global_map(&export.path, &map, export.field_width) {
                Ok(()) => None,
                Err(e) => {
                    warn!(
                        "ControlLoop: map export to {} failed: {}",
                        export.path.display(),
                        e
                    );
                    Some(e)
                }
            },
            None => None,
        };

        info!(
            "ControlLoop: {} cells touched, {} occupied, {} votes dropped",
            coverage.touched_cells, coverage.occupied_cells, self.totals.merge.votes_dropped
        );

        Ok(RunSummary {
            cycles: self.totals.cycles,
            samples_used: self.totals.samples_used,
            beams_skipped: self.totals.beams_skipped,
            merge: self.totals.merge,
            actuator_failures: self.totals.actuator_failures,
            stop_reason: reason,
            coverage,
            map,
            export_error,
        })
    }

    /// Send one command pair, returning how many calls failed.
    fn send(&mut self, linear_velocity: f32, angular_command: f32) -> usize {
        let mut failures = 0;
        if let Err(e) = self.robot.set_linear_velocity(linear_velocity) {
            warn!("ControlLoop: linear velocity command failed: {}", e);
            failures += 1;
        }
        if let Err(e) = self.robot.set_angular_command(angular_command) {
            warn!("ControlLoop: angular command failed: {}", e);
            failures += 1;
        }
        failures
    }

    fn publish_snapshot(&self) {
        let Some(shared) = &self.shared else {
            return;
        };
        match self.accumulator.compose() {
            Ok(map) => {
                publish(shared, map);
            }
            Err(e) => warn!("ControlLoop: snapshot compose failed: {}", e),
        }
    }
}
