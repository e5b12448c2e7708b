//! Board construction, neighbor linking, and lookup.
//!
//! A board of size `s` covers every coordinate in `[-s, s]²`, giving
//! `(2s+1)²` cells. Construction runs in two passes: create every cell, then
//! link each one to the cells at its eight direction offsets. Cells on the
//! edge simply have empty slots where the offset leaves the square.
//!
//! ```
//! use octa_core::board::{Board, GridType};
//! use octa_core::core::{Direction, GameRng};
//!
//! let board = Board::with_rng(2, GridType::Octagonal, &mut GameRng::new(1));
//! assert_eq!(board.total_cell_count(), 25);
//!
//! let corner = board.get_cell(2, 2).unwrap();
//! assert_eq!(corner.neighbor_count(), 3);
//! assert!(corner.neighbor(Direction::North).is_none());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::cell::{Cell, CellId, CellView};
use crate::core::{CellState, Coordinate, Direction, GameRng, Player};

/// Board topology tag. Only 8-connected square boards exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridType {
    #[default]
    Octagonal,
}

impl std::fmt::Display for GridType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridType::Octagonal => f.write_str("Octagonal"),
        }
    }
}

/// Cell totals per owner state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    pub neutral: usize,
    pub player_one: usize,
    pub player_two: usize,
    pub blocked: usize,
}

impl CellCounts {
    /// Cells held by a player.
    #[must_use]
    pub fn for_player(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    fn add(&mut self, state: CellState) {
        match state {
            CellState::Neutral => self.neutral += 1,
            CellState::Player1 => self.player_one += 1,
            CellState::Player2 => self.player_two += 1,
            CellState::Blocked => self.blocked += 1,
        }
    }
}

/// The game board. Sole owner of every cell.
///
/// Structure is fixed after construction; only cell owners and arrows change.
#[derive(Clone, Debug)]
pub struct Board {
    size: i32,
    grid_type: GridType,
    cells: Vec<Cell>,
    index: FxHashMap<Coordinate, CellId>,
}

impl Board {
    /// Build a board with arrows drawn from an entropy-seeded RNG.
    ///
    /// Panics if `size` is negative.
    #[must_use]
    pub fn new(size: i32, grid_type: GridType) -> Self {
        let mut rng = GameRng::from_entropy();
        debug!(seed = rng.seed(), "seeding board arrows");
        Self::with_rng(size, grid_type, &mut rng)
    }

    /// Build a board with arrows drawn from `rng`.
    ///
    /// Panics if `size` is negative.
    #[must_use]
    pub fn with_rng(size: i32, grid_type: GridType, rng: &mut GameRng) -> Self {
        Self::with_arrows(size, grid_type, |_| rng.random_direction())
    }

    /// Build a board with an explicit initial arrow per coordinate.
    ///
    /// Cells are created row by row from `y = -size`, so `arrow_for` sees
    /// coordinates in that order. Panics if `size` is negative.
    #[instrument(skip(arrow_for))]
    pub fn with_arrows(
        size: i32,
        grid_type: GridType,
        mut arrow_for: impl FnMut(Coordinate) -> Direction,
    ) -> Self {
        assert!(size >= 0, "Board size must be non-negative, got {size}");

        let side = (2 * size + 1) as usize;
        let mut board = Self {
            size,
            grid_type,
            cells: Vec::with_capacity(side * side),
            index: FxHashMap::default(),
        };

        for y in -size..=size {
            for x in -size..=size {
                let coordinate = Coordinate::new(x, y);
                board.insert_cell(coordinate, arrow_for(coordinate));
            }
        }

        for raw in 0..board.cells.len() {
            board.link_neighbors(CellId(raw as u32));
        }

        debug!(cells = board.cells.len(), "board built");
        board
    }

    /// Register a new cell. Panics on an out-of-bounds or occupied coordinate.
    fn insert_cell(&mut self, coordinate: Coordinate, arrow: Direction) -> CellId {
        if !coordinate.within(self.size) {
            panic!("Coordinate {coordinate} is outside a board of size {}", self.size);
        }
        if self.index.contains_key(&coordinate) {
            panic!("Cell already exists at {coordinate}");
        }

        let id = CellId(self.cells.len() as u32);
        self.cells.push(Cell::new(coordinate, arrow));
        self.index.insert(coordinate, id);
        id
    }

    fn link_neighbors(&mut self, id: CellId) {
        let center = self.cells[id.index()].coordinate();

        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            if let Some(&neighbor) = self.index.get(&center.offset(dx, dy)) {
                self.link(id, direction, neighbor);
            }
        }
    }

    /// Set `from -> to` in `direction` and the reciprocal slot on `to`.
    fn link(&mut self, from: CellId, direction: Direction, to: CellId) {
        self.cells[from.index()].set_neighbor(direction, to);

        let back = direction.opposite();
        if self.cells[to.index()].neighbor(back) != Some(from) {
            self.cells[to.index()].set_neighbor(back, from);
        }
    }

    // === Lookup ===

    /// Cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cell(Coordinate::new(x, y))
    }

    /// Cell at a coordinate, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cell_id(coordinate).map(|id| &self.cells[id.index()])
    }

    /// Mutable cell at a coordinate, for initial setup.
    pub fn cell_mut(&mut self, coordinate: Coordinate) -> Option<&mut Cell> {
        let id = self.cell_id(coordinate)?;
        Some(&mut self.cells[id.index()])
    }

    /// Arena id for a coordinate.
    #[must_use]
    pub fn cell_id(&self, coordinate: Coordinate) -> Option<CellId> {
        self.index.get(&coordinate).copied()
    }

    /// Cell by arena id.
    #[must_use]
    pub fn cell_by_id(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    pub(crate) fn cell_by_id_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.index()]
    }

    /// Neighbor of the cell at `coordinate` in `direction`.
    #[must_use]
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<&Cell> {
        let id = self.cell(coordinate)?.neighbor(direction)?;
        self.cell_by_id(id)
    }

    /// Check if a coordinate is on the board.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index.contains_key(&coordinate)
    }

    // === Enumeration ===

    /// Iterate over every cell. Order is not significant.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Snapshot of every cell.
    #[must_use]
    pub fn all_cells(&self) -> Vec<CellView> {
        self.cells.iter().map(Cell::view).collect()
    }

    // === Diagnostics ===

    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn grid_type(&self) -> GridType {
        self.grid_type
    }

    #[must_use]
    pub fn total_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells in a given owner state.
    #[must_use]
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.owner() == state).count()
    }

    /// Count cells by owner state in one pass.
    #[must_use]
    pub fn tally(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            counts.add(cell.owner());
        }
        counts
    }

    /// Verify every link matches its direction offset and has a reciprocal.
    ///
    /// Empty slots must point off the board.
    #[must_use]
    pub fn links_consistent(&self) -> bool {
        self.cells.iter().enumerate().all(|(raw, cell)| {
            let id = CellId(raw as u32);
            Direction::ALL.iter().all(|&direction| {
                let (dx, dy) = direction.offset();
                let expected = cell.coordinate().offset(dx, dy);
                match cell.neighbor(direction) {
                    Some(n) => {
                        let other = &self.cells[n.index()];
                        other.coordinate() == expected
                            && other.neighbor(direction.opposite()) == Some(id)
                    }
                    None => !self.contains(expected),
                }
            })
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (-self.size..=self.size).rev() {
            for x in -self.size..=self.size {
                if x > -self.size {
                    f.write_str(" ")?;
                }
                match self.get_cell(x, y) {
                    Some(cell) => write!(f, "[{}]", cell.owner().glyph())?,
                    None => f.write_str(" . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: i32) -> Board {
        Board::with_arrows(size, GridType::Octagonal, |_| Direction::North)
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(board(0).total_cell_count(), 1);
        assert_eq!(board(1).total_cell_count(), 9);
        assert_eq!(board(2).total_cell_count(), 25);
        assert_eq!(board(4).total_cell_count(), 81);
    }

    #[test]
    fn test_size_zero_is_isolated() {
        let b = board(0);
        let only = b.get_cell(0, 0).unwrap();
        assert_eq!(only.neighbor_count(), 0);
        assert!(b.links_consistent());
    }

    #[test]
    #[should_panic(expected = "Board size must be non-negative")]
    fn test_negative_size() {
        let _ = board(-1);
    }

    #[test]
    #[should_panic(expected = "Cell already exists")]
    fn test_duplicate_cell() {
        let mut b = board(1);
        b.insert_cell(Coordinate::origin(), Direction::East);
    }

    #[test]
    #[should_panic(expected = "outside a board of size 1")]
    fn test_out_of_bounds_cell() {
        let mut b = board(1);
        b.insert_cell(Coordinate::new(2, 0), Direction::East);
    }

    #[test]
    fn test_links_consistent() {
        for size in 0..5 {
            assert!(board(size).links_consistent(), "size {size}");
        }
    }

    #[test]
    fn test_with_arrows_sees_every_coordinate() {
        let mut seen = Vec::new();
        let b = Board::with_arrows(1, GridType::Octagonal, |c| {
            seen.push(c);
            Direction::from_index((c.x + 1 + 3 * (c.y + 1)) as usize)
        });

        assert_eq!(seen.len(), 9);
        assert_eq!(seen[0], Coordinate::new(-1, -1));
        assert_eq!(b.get_cell(-1, -1).unwrap().arrow(), Direction::North);
        assert_eq!(b.get_cell(0, -1).unwrap().arrow(), Direction::NorthEast);
    }

    #[test]
    fn test_with_rng_is_reproducible() {
        let a = Board::with_rng(3, GridType::Octagonal, &mut GameRng::new(9));
        let b = Board::with_rng(3, GridType::Octagonal, &mut GameRng::new(9));

        for view in a.all_cells() {
            assert_eq!(b.cell(view.coordinate).unwrap().arrow(), view.arrow);
        }
    }

    #[test]
    fn test_tally() {
        let mut b = board(1);
        b.cell_mut(Coordinate::origin()).unwrap().set_owner(CellState::Player1);
        b.cell_mut(Coordinate::new(1, 1)).unwrap().set_owner(CellState::Player2);
        b.cell_mut(Coordinate::new(-1, 1)).unwrap().set_owner(CellState::Player2);

        let counts = b.tally();
        assert_eq!(counts.player_one, 1);
        assert_eq!(counts.player_two, 2);
        assert_eq!(counts.neutral, 6);
        assert_eq!(counts.for_player(Player::Two), 2);
        assert_eq!(b.count_state(CellState::Player2), 2);
    }

    #[test]
    fn test_display() {
        let mut b = board(1);
        b.cell_mut(Coordinate::new(-1, 1)).unwrap().set_owner(CellState::Player1);
        b.cell_mut(Coordinate::new(1, -1)).unwrap().set_owner(CellState::Player2);

        let expected = "[1] [N] [N]\n[N] [N] [N]\n[N] [N] [2]\n";
        assert_eq!(format!("{b}"), expected);
    }

    #[test]
    fn test_grid_type() {
        let b = board(1);
        assert_eq!(b.grid_type(), GridType::Octagonal);
        assert_eq!(format!("{}", b.grid_type()), "Octagonal");
        assert_eq!(b.size(), 1);
    }
}
