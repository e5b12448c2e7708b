//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// Integer grid position. The board's lookup key.
///
/// `y` grows to the north, `x` grows to the east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0,0)`, center of every board.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check if both axes lie within `[-size, size]`.
    #[must_use]
    pub const fn within(self, size: i32) -> bool {
        self.x >= -size && self.x <= size && self.y >= -size && self.y <= size
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_offset() {
        let c = Coordinate::new(2, -1);
        assert_eq!(c.offset(1, 1), Coordinate::new(3, 0));
        assert_eq!(c.offset(-2, 1), Coordinate::origin());
    }

    #[test]
    fn test_within() {
        assert!(Coordinate::new(1, -1).within(1));
        assert!(Coordinate::origin().within(0));
        assert!(!Coordinate::new(2, 0).within(1));
        assert!(!Coordinate::new(0, -2).within(1));
    }

    #[test]
    fn test_value_equality_and_hash() {
        let mut set = FxHashSet::default();
        set.insert(Coordinate::new(1, 2));
        assert!(set.contains(&Coordinate::from((1, 2))));
        assert!(!set.contains(&Coordinate::new(2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coordinate::new(-3, 4)), "(-3,4)");
    }

    #[test]
    fn test_serialization() {
        let c = Coordinate::new(-1, 5);
        let json = serde_json::to_string(&c).unwrap();
        let deserialized: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
