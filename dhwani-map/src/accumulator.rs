//! Monotone fusion of projected votes into the two evidence grids.
//!
//! | Grid | Initial | Fusion | Over time |
//! |------|---------|--------|-----------|
//! | obstacle | 0.0 | `max` | never decreases |
//! | empty | 1.0 | `min` | never increases |
//!
//! Merge cost is proportional to the number of votes in the [`DirtySet`],
//! not to the grid size. Votes that land outside the grid are dropped one
//! by one and counted; the rest of the fan still merges.

use log::trace;

use crate::compositor::{GlobalMap, compose};
use crate::config::GridConfig;
use crate::error::Result;
use crate::fuzzy::{CellVote, DirtySet};
use crate::grid::EvidenceGrid;

/// Initial obstacle evidence
pub const OBSTACLE_PRIOR: f32 = 0.0;

/// Initial empty evidence ("fully free")
pub const EMPTY_PRIOR: f32 = 1.0;

/// Outcome of one merge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Obstacle votes applied
    pub obstacle_votes: usize,
    /// Empty votes applied
    pub empty_votes: usize,
    /// Votes of either kind that fell outside the grid
    pub votes_dropped: usize,
}

impl MergeStats {
    /// Votes that reached a cell
    pub fn applied(&self) -> usize {
        self.obstacle_votes + self.empty_votes
    }

    /// Add another merge's counts into this one
    pub fn accumulate(&mut self, other: &MergeStats) {
        self.obstacle_votes += other.obstacle_votes;
        self.empty_votes += other.empty_votes;
        self.votes_dropped += other.votes_dropped;
    }
}

/// Summary of how much of the grid carries evidence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapCoverage {
    /// Cells with any evidence (obstacle raised or empty lowered)
    pub touched_cells: usize,
    /// Cells with non-zero obstacle evidence
    pub obstacle_cells: usize,
    /// Cells whose empty evidence has fallen all the way to zero
    pub retracted_empty_cells: usize,
    /// Cells the compositor would mark occupied
    pub occupied_cells: usize,
}

/// Owned copy of both grids taken between merges
#[derive(Clone, Debug, PartialEq)]
pub struct EvidenceSnapshot {
    /// Obstacle evidence
    pub obstacle: EvidenceGrid,
    /// Empty evidence
    pub empty: EvidenceGrid,
}

impl EvidenceSnapshot {
    /// Compose the snapshot into an occupancy map
    pub fn compose(&self) -> Result<GlobalMap> {
        compose(&self.obstacle, &self.empty)
    }
}

/// Holds the obstacle and empty evidence grids for one map pass.
#[derive(Clone, Debug)]
pub struct OccupancyAccumulator {
    obstacle: EvidenceGrid,
    empty: EvidenceGrid,
}

impl OccupancyAccumulator {
    /// Allocate both grids at their priors.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_dimensions(config.width, config.height))
    }

    fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            obstacle: EvidenceGrid::filled(width, height, OBSTACLE_PRIOR),
            empty: EvidenceGrid::filled(width, height, EMPTY_PRIOR),
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.obstacle.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.obstacle.height()
    }

    /// Obstacle evidence grid
    pub fn obstacle(&self) -> &EvidenceGrid {
        &self.obstacle
    }

    /// Empty evidence grid
    pub fn empty(&self) -> &EvidenceGrid {
        &self.empty
    }

    /// Merge and drain everything pending in `dirty`.
    pub fn merge(&mut self, dirty: &mut DirtySet) -> MergeStats {
        let (obstacle_votes, empty_votes) = dirty.drain();
        let (applied_obstacle, dropped_obstacle) =
            fuse(&mut self.obstacle, obstacle_votes, f32::max);
        let (applied_empty, dropped_empty) = fuse(&mut self.empty, empty_votes, f32::min);

        MergeStats {
            obstacle_votes: applied_obstacle,
            empty_votes: applied_empty,
            votes_dropped: dropped_obstacle + dropped_empty,
        }
    }

    /// Merge explicit vote lists without consuming them.
    pub fn merge_votes(&mut self, obstacle: &[CellVote], empty: &[CellVote]) -> MergeStats {
        let (applied_obstacle, dropped_obstacle) =
            fuse(&mut self.obstacle, obstacle.iter().copied(), f32::max);
        let (applied_empty, dropped_empty) =
            fuse(&mut self.empty, empty.iter().copied(), f32::min);

        MergeStats {
            obstacle_votes: applied_obstacle,
            empty_votes: applied_empty,
            votes_dropped: dropped_obstacle + dropped_empty,
        }
    }

    /// Owned copy of both grids
    pub fn snapshot(&self) -> EvidenceSnapshot {
        EvidenceSnapshot {
            obstacle: self.obstacle.clone(),
            empty: self.empty.clone(),
        }
    }

    /// Compose the current evidence into an occupancy map
    pub fn compose(&self) -> Result<GlobalMap> {
        compose(&self.obstacle, &self.empty)
    }

    /// Count cells by evidence state (full scan).
    pub fn coverage(&self) -> MapCoverage {
        let mut coverage = MapCoverage::default();
        for (&obstacle, &empty) in self.obstacle.values().iter().zip(self.empty.values()) {
            let has_obstacle = obstacle != OBSTACLE_PRIOR;
            let retracted = empty == 0.0;
            if has_obstacle || empty != EMPTY_PRIOR {
                coverage.touched_cells += 1;
            }
            if has_obstacle {
                coverage.obstacle_cells += 1;
            }
            if retracted {
                coverage.retracted_empty_cells += 1;
            }
            if has_obstacle && retracted {
                coverage.occupied_cells += 1;
            }
        }
        coverage
    }
}

/// Apply votes with `op`, returning (applied, dropped).
fn fuse<I>(grid: &mut EvidenceGrid, votes: I, op: fn(f32, f32) -> f32) -> (usize, usize)
where
    I: IntoIterator<Item = CellVote>,
{
    let mut applied = 0;
    let mut dropped = 0;
    for vote in votes {
        match grid.get_mut(vote.coord) {
            Some(cell) => {
                *cell = op(*cell, vote.confidence);
                applied += 1;
            }
            None => {
                trace!(
                    "OccupancyAccumulator: dropped vote for ({}, {}) outside {}x{}",
                    vote.coord.x,
                    vote.coord.y,
                    grid.width(),
                    grid.height()
                );
                dropped += 1;
            }
        }
    }
    (applied, dropped)
}
