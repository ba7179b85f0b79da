//! Batch of cells touched during one sensing cycle.

use crate::core::GridCoord;

use super::projector::FuzzyVote;

/// One confidence vote for one cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVote {
    /// Target cell (not yet bounds-checked)
    pub coord: GridCoord,
    /// Confidence in `[0, 1]`
    pub confidence: f32,
}

impl CellVote {
    /// Create a vote
    #[inline]
    pub fn new(coord: GridCoord, confidence: f32) -> Self {
        Self { coord, confidence }
    }
}

/// Votes collected since the last merge.
///
/// Obstacle and empty votes are kept in separate lists so the accumulator
/// can apply `max` and `min` independently. Order does not matter and
/// duplicates are allowed. The accumulator drains the set on merge, so
/// one buffer can be reused for every cycle without reallocating.
#[derive(Clone, Debug, Default)]
pub struct DirtySet {
    obstacle: Vec<CellVote>,
    empty: Vec<CellVote>,
}

impl DirtySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set sized for `beams` full fans
    pub fn with_beam_capacity(beams: usize) -> Self {
        Self {
            obstacle: Vec::with_capacity(beams * 9),
            empty: Vec::with_capacity(beams * 9),
        }
    }

    /// Record both halves of a fan vote
    #[inline]
    pub fn push(&mut self, vote: &FuzzyVote) {
        self.obstacle.push(CellVote::new(vote.cell, vote.obstacle));
        self.empty.push(CellVote::new(vote.cell, vote.empty));
    }

    /// Record a bare obstacle vote
    #[inline]
    pub fn push_obstacle(&mut self, vote: CellVote) {
        self.obstacle.push(vote);
    }

    /// Record a bare empty vote
    #[inline]
    pub fn push_empty(&mut self, vote: CellVote) {
        self.empty.push(vote);
    }

    /// Pending obstacle votes
    pub fn obstacle_votes(&self) -> &[CellVote] {
        &self.obstacle
    }

    /// Pending empty votes
    pub fn empty_votes(&self) -> &[CellVote] {
        &self.empty
    }

    /// Total pending votes across both lists
    pub fn len(&self) -> usize {
        self.obstacle.len() + self.empty.len()
    }

    /// Nothing pending?
    pub fn is_empty(&self) -> bool {
        self.obstacle.is_empty() && self.empty.is_empty()
    }

    /// Discard pending votes, keeping capacity
    pub fn clear(&mut self) {
        self.obstacle.clear();
        self.empty.clear();
    }

    /// Take both lists, leaving the set empty with its capacity intact.
    pub(crate) fn drain(
        &mut self,
    ) -> (
        std::vec::Drain<'_, CellVote>,
        std::vec::Drain<'_, CellVote>,
    ) {
        (self.obstacle.drain(..), self.empty.drain(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_splits_vote() {
        let mut dirty = DirtySet::new();
        dirty.push(&FuzzyVote {
            cell: GridCoord::new(3, 4),
            obstacle: 0.8,
            empty: 0.5,
        });

        assert_eq!(dirty.len(), 2);
        assert_eq!(dirty.obstacle_votes(), &[CellVote::new(GridCoord::new(3, 4), 0.8)]);
        assert_eq!(dirty.empty_votes(), &[CellVote::new(GridCoord::new(3, 4), 0.5)]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut dirty = DirtySet::with_beam_capacity(16);
        dirty.push_obstacle(CellVote::new(GridCoord::new(0, 0), 1.0));
        dirty.push_empty(CellVote::new(GridCoord::new(0, 0), 0.0));
        assert!(!dirty.is_empty());

        dirty.clear();
        assert!(dirty.is_empty());
        assert!(dirty.obstacle.capacity() >= 144);
    }
}
