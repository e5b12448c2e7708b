//! Recoverable rule errors.
//!
//! Broken construction invariants (negative board size, duplicate cells)
//! panic instead; they indicate a caller bug, not a bad move.

use thiserror::Error;

use crate::core::{Coordinate, Player};

/// Errors returned by rule operations.
///
/// A failed operation leaves the board and turn state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The target is off the board or not owned by the acting player.
    #[error("invalid move: {player} cannot move on {coordinate}")]
    InvalidMove {
        coordinate: Coordinate,
        player: Player,
    },
}
