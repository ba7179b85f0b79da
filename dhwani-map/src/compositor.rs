//! Ternary occupancy map composed from the two evidence grids.

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::EvidenceGrid;

/// Value written for an occupied cell
pub const OCCUPIED: u8 = 1;

/// Value written for a free or unknown cell
pub const FREE_OR_UNKNOWN: u8 = 0;

/// Compose obstacle and empty evidence into an occupancy map.
///
/// A cell is occupied exactly when it has non-zero obstacle evidence and
/// its empty evidence has been retracted to zero. Everything else is
/// free or unknown; the two are not distinguished. Pure: the inputs are
/// only read.
pub fn compose(obstacle: &EvidenceGrid, empty: &EvidenceGrid) -> Result<GlobalMap> {
    obstacle.ensure_same_shape(empty)?;

    let cells = obstacle
        .values()
        .iter()
        .zip(empty.values())
        .map(|(&o, &e)| {
            if o != 0.0 && e == 0.0 {
                OCCUPIED
            } else {
                FREE_OR_UNKNOWN
            }
        })
        .collect();

    Ok(GlobalMap {
        cells,
        width: obstacle.width(),
        height: obstacle.height(),
    })
}

/// Occupancy map with one 0/1 value per cell.
///
/// Same layout as [`EvidenceGrid`] (`index = y * width + x`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalMap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl GlobalMap {
    /// All-free map
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![FREE_OR_UNKNOWN; width * height],
            width,
            height,
        }
    }

    /// Build a map from cells in storage order. `None` if the length is wrong
    /// or any value is not 0/1.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Option<Self> {
        if cells.len() != width * height || cells.iter().any(|&c| c > OCCUPIED) {
            return None;
        }
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at a cell, `None` outside the map
    pub fn get(&self, coord: GridCoord) -> Option<u8> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Is the cell occupied? Cells outside the map are not.
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.get(coord) == Some(OCCUPIED)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == OCCUPIED).count()
    }

    /// Values for one fixed `x`, ordered by `y`. Empty when `x` is outside
    /// the map.
    pub fn row(&self, x: usize) -> impl Iterator<Item = u8> + '_ {
        let len = if x < self.width { self.height } else { 0 };
        (0..len).map(move |y| self.cells[y * self.width + x])
    }

    /// Raw cells in storage order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grids() -> (EvidenceGrid, EvidenceGrid) {
        let mut obstacle = EvidenceGrid::filled(4, 3, 0.0);
        let mut empty = EvidenceGrid::filled(4, 3, 1.0);

        // occupied
        obstacle.set(GridCoord::new(1, 2), 0.8);
        empty.set(GridCoord::new(1, 2), 0.0);
        // obstacle evidence but still partly free
        obstacle.set(GridCoord::new(2, 0), 1.0);
        empty.set(GridCoord::new(2, 0), 0.5);
        // retracted without obstacle evidence
        empty.set(GridCoord::new(3, 1), 0.0);

        (obstacle, empty)
    }

    #[test]
    fn test_truth_table() {
        let (obstacle, empty) = grids();
        let map = compose(&obstacle, &empty).unwrap();

        assert_eq!(map.occupied_count(), 1);
        assert!(map.is_occupied(GridCoord::new(1, 2)));
        assert!(!map.is_occupied(GridCoord::new(2, 0)));
        assert!(!map.is_occupied(GridCoord::new(3, 1)));
        assert!(!map.is_occupied(GridCoord::new(-1, 2)));
        assert_eq!(map.get(GridCoord::new(4, 0)), None);
    }

    #[test]
    fn test_compose_is_pure_and_idempotent() {
        let (obstacle, empty) = grids();
        let before = (obstacle.clone(), empty.clone());

        let first = compose(&obstacle, &empty).unwrap();
        let second = compose(&obstacle, &empty).unwrap();
        assert_eq!(first, second);
        assert_eq!((obstacle, empty), before);
    }

    #[test]
    fn test_dimension_mismatch() {
        let obstacle = EvidenceGrid::filled(4, 3, 0.0);
        let empty = EvidenceGrid::filled(3, 4, 1.0);
        assert!(compose(&obstacle, &empty).is_err());
    }

    #[test]
    fn test_row_is_fixed_x() {
        let (obstacle, empty) = grids();
        let map = compose(&obstacle, &empty).unwrap();
        assert_eq!(map.row(1).collect::<Vec<_>>(), vec![0, 0, 1]);
        assert_eq!(map.row(0).collect::<Vec<_>>(), vec![0, 0, 0]);
        assert_eq!(map.row(4).count(), 0);
        assert_eq!(map.row(usize::MAX).count(), 0);
    }

    #[test]
    fn test_from_cells_validates() {
        assert!(GlobalMap::from_cells(2, 2, vec![0, 1, 0, 0]).is_some());
        assert!(GlobalMap::from_cells(2, 2, vec![0, 1, 0]).is_none());
        assert!(GlobalMap::from_cells(2, 2, vec![0, 2, 0, 0]).is_none());
    }
}
