//! Board cells and their arena identifiers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellState, Coordinate, Direction};

/// Index of a cell in its board's arena.
///
/// Only meaningful for the board that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A grid cell.
///
/// The coordinate and neighbor slots are fixed once the board is built.
/// Only `owner` and `arrow` change during play.
#[derive(Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    owner: CellState,
    arrow: Direction,
    neighbors: [Option<CellId>; Direction::COUNT],
}

impl Cell {
    /// Create an unlinked neutral cell.
    pub(crate) fn new(coordinate: Coordinate, arrow: Direction) -> Self {
        Self {
            coordinate,
            owner: CellState::Neutral,
            arrow,
            neighbors: [None; Direction::COUNT],
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn owner(&self) -> CellState {
        self.owner
    }

    #[must_use]
    pub fn arrow(&self) -> Direction {
        self.arrow
    }

    /// Set the owner (initial setup or rule engine).
    pub fn set_owner(&mut self, owner: CellState) {
        self.owner = owner;
    }

    /// Point the arrow in a given direction.
    pub fn set_arrow(&mut self, arrow: Direction) {
        self.arrow = arrow;
    }

    /// Rotate the arrow one step clockwise and return the new direction.
    pub(crate) fn rotate_arrow(&mut self) -> Direction {
        self.arrow = self.arrow.rotate_clockwise();
        self.arrow
    }

    /// Neighbor in a direction, `None` past the board edge.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, neighbor: CellId) {
        self.neighbors[direction.index()] = Some(neighbor);
    }

    /// All linked neighbors in clockwise order.
    #[must_use]
    pub fn valid_neighbors(&self) -> SmallVec<[CellId; 8]> {
        self.neighbors.iter().flatten().copied().collect()
    }

    /// Number of linked neighbors (3 at corners, 5 on edges, 8 inside).
    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// Copyable snapshot of the mutable state.
    #[must_use]
    pub fn view(&self) -> CellView {
        CellView {
            coordinate: self.coordinate,
            owner: self.owner,
            arrow: self.arrow,
        }
    }
}

/// Read-only snapshot of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    pub coordinate: Coordinate,
    pub owner: CellState,
    pub arrow: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_neutral_and_unlinked() {
        let cell = Cell::new(Coordinate::new(1, 2), Direction::East);

        assert_eq!(cell.owner(), CellState::Neutral);
        assert_eq!(cell.arrow(), Direction::East);
        assert_eq!(cell.neighbor_count(), 0);
        assert!(cell.valid_neighbors().is_empty());
    }

    #[test]
    fn test_rotate_arrow() {
        let mut cell = Cell::new(Coordinate::origin(), Direction::NorthWest);

        assert_eq!(cell.rotate_arrow(), Direction::North);
        assert_eq!(cell.arrow(), Direction::North);
    }

    #[test]
    fn test_neighbor_slots() {
        let mut cell = Cell::new(Coordinate::origin(), Direction::North);
        cell.set_neighbor(Direction::South, CellId(4));
        cell.set_neighbor(Direction::North, CellId(9));

        assert_eq!(cell.neighbor(Direction::South), Some(CellId(4)));
        assert_eq!(cell.neighbor(Direction::East), None);
        assert_eq!(cell.neighbor_count(), 2);
        assert_eq!(cell.valid_neighbors().as_slice(), &[CellId(9), CellId(4)]);
    }

    #[test]
    fn test_view_snapshot() {
        let mut cell = Cell::new(Coordinate::new(0, 1), Direction::South);
        cell.set_owner(CellState::Player2);

        let view = cell.view();
        cell.set_owner(CellState::Neutral);

        assert_eq!(view.owner, CellState::Player2);
        assert_eq!(view.coordinate, Coordinate::new(0, 1));
        assert_eq!(view.arrow, Direction::South);
    }

    #[test]
    fn test_cell_id_display() {
        assert_eq!(format!("{}", CellId(12)), "Cell(12)");
        assert_eq!(CellId(12).index(), 12);
    }
}
