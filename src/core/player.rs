//! Players and cell ownership.
//!
//! ## Player
//!
//! The two fixed factions. Each maps 1:1 onto a `CellState`.
//!
//! ## CellState
//!
//! Who controls a cell. `Blocked` is reserved for rule variants and is never
//! assigned by the engine.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Owner state this player writes into captured cells.
    #[must_use]
    pub const fn cell_state(self) -> CellState {
        match self {
            Player::One => CellState::Player1,
            Player::Two => CellState::Player2,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => f.write_str("Player 1"),
            Player::Two => f.write_str("Player 2"),
        }
    }
}

/// Ownership state of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Neutral,
    Player1,
    Player2,
    Blocked,
}

impl CellState {
    /// Owned by either player.
    #[must_use]
    pub const fn is_player_owned(self) -> bool {
        matches!(self, CellState::Player1 | CellState::Player2)
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            CellState::Player1 => Some(Player::One),
            CellState::Player2 => Some(Player::Two),
            CellState::Neutral | CellState::Blocked => None,
        }
    }

    /// One-character board glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Neutral => 'N',
            CellState::Player1 => '1',
            CellState::Player2 => '2',
            CellState::Blocked => 'B',
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.cell_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_state_mapping() {
        assert_eq!(Player::One.cell_state(), CellState::Player1);
        assert_eq!(Player::Two.cell_state(), CellState::Player2);
        assert_eq!(CellState::from(Player::Two), CellState::Player2);

        for player in Player::ALL {
            assert_eq!(player.cell_state().player(), Some(player));
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_is_player_owned() {
        assert!(CellState::Player1.is_player_owned());
        assert!(CellState::Player2.is_player_owned());
        assert!(!CellState::Neutral.is_player_owned());
        assert!(!CellState::Blocked.is_player_owned());
        assert_eq!(CellState::Blocked.player(), None);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(CellState::default(), CellState::Neutral);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::One), "Player 1");
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CellState::Player2).unwrap();
        let deserialized: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, CellState::Player2);
    }
}
