//! Game logic trait and game results.
//!
//! Implementations define:
//! - Which cells a player may select
//! - How a move changes the board
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use super::chain::MoveOutcome;
use crate::board::Board;
use crate::core::{Coordinate, Player};
use crate::error::RuleError;

/// Result of a completed game.
///
/// Created once, when a win condition first triggers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winning player. `None` for a tie.
    pub winner: Option<Player>,
    /// Human-readable explanation.
    pub reason: String,
}

impl GameResult {
    /// A decided game with a winner.
    pub fn win(winner: Player, reason: impl Into<String>) -> Self {
        Self {
            winner: Some(winner),
            reason: reason.into(),
        }
    }

    /// A tied game.
    pub fn tie(reason: impl Into<String>) -> Self {
        Self {
            winner: None,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == Some(player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Game logic trait.
///
/// ## Implementation Notes
///
/// - `is_valid_move`: Must not mutate anything
/// - `make_move`: Either fully applies or fails before any mutation
/// - `is_game_over`: Latches the result; once true, stays true
/// - `switch_player`: Only ever called by the caller, never implicitly
pub trait GameLogic {
    /// The board being played on.
    fn board(&self) -> &Board;

    /// Check if `player` may select the cell at `coordinate`.
    ///
    /// Off-board coordinates are never valid.
    fn is_valid_move(&self, coordinate: Coordinate, player: Player) -> bool;

    /// Apply a move and its chain reaction.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidMove` if `is_valid_move` is false.
    fn make_move(&mut self, coordinate: Coordinate, player: Player)
        -> Result<MoveOutcome, RuleError>;

    /// Evaluate the win condition, recording the result the first time it holds.
    fn is_game_over(&mut self) -> bool;

    /// Result of a decided game, `None` while in progress.
    fn game_result(&self) -> Option<&GameResult>;

    /// Player whose turn it is.
    fn current_player(&self) -> Player;

    /// Hand the turn to the other player.
    fn switch_player(&mut self);

    /// Moves made so far.
    fn turn_count(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::win(Player::Two, "Player 2 wins by elimination");
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert!(!result.is_tie());

        let tie = GameResult::tie("Tie at turn limit");
        assert!(tie.is_tie());
        assert!(!tie.is_winner(Player::One));
        assert!(!tie.is_winner(Player::Two));
    }

    #[test]
    fn test_display_uses_reason() {
        let result = GameResult::win(Player::One, "Player 1 wins by elimination");
        assert_eq!(format!("{result}"), "Player 1 wins by elimination");
    }

    #[test]
    fn test_serialization() {
        let result = GameResult::tie("Tie at turn limit: both players control 2 cells");
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
