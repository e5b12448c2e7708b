//! Compass directions for cell arrows and neighbor slots.
//!
//! Directions are indexed 0..8 clockwise starting at North. The index doubles
//! as the neighbor slot index inside a cell.

use serde::{Deserialize, Serialize};

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 8;

    /// All directions in clockwise order from North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Clockwise index, North = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index. Wraps modulo 8.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Next direction clockwise.
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Grid offset `(dx, dy)` to the neighbor in this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Short compass label.
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), *dir);
        }
        assert_eq!(Direction::from_index(9), Direction::NorthEast);
    }

    #[test]
    fn test_rotate_clockwise_sequence() {
        let mut dir = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..8 {
            dir = dir.rotate_clockwise();
            seen.push(dir);
        }
        assert_eq!(
            seen,
            vec![
                Direction::NorthEast,
                Direction::East,
                Direction::SouthEast,
                Direction::South,
                Direction::SouthWest,
                Direction::West,
                Direction::NorthWest,
                Direction::North,
            ]
        );
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0), "{dir}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::SouthWest), "SW");
        assert_eq!(format!("{}", Direction::North), "N");
    }
}
