//! Game configuration types.
//!
//! Callers configure the rule engine at startup by providing a `GameConfig`:
//! - `WinCondition`: how the game ends
//! - `turn_limit`: move cap for `TurnLimitMajority`
//! - `stop_on_enemy`: whether chains halt at opponent cells
//!
//! The engine copies these at construction and never changes them afterwards.

use serde::{Deserialize, Serialize};

/// How a game is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCondition {
    /// A player with zero cells (after at least one move) loses.
    #[default]
    Elimination,
    /// After `turn_limit` moves, the player with more cells wins.
    TurnLimitMajority,
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Win condition evaluated by `is_game_over`.
    pub win_condition: WinCondition,

    /// Move count that ends a `TurnLimitMajority` game.
    ///
    /// Ignored for `Elimination`.
    pub turn_limit: u32,

    /// Chains stop at (and leave untouched) any player-owned cell.
    pub stop_on_enemy: bool,
}

impl GameConfig {
    /// Create a configuration.
    pub fn new(win_condition: WinCondition, turn_limit: u32) -> Self {
        Self {
            win_condition,
            turn_limit,
            stop_on_enemy: false,
        }
    }

    /// Elimination game with no turn limit.
    pub fn elimination() -> Self {
        Self::new(WinCondition::Elimination, 0)
    }

    /// Majority game decided after `limit` moves.
    pub fn turn_limit(limit: u32) -> Self {
        Self::new(WinCondition::TurnLimitMajority, limit)
    }

    /// Enable or disable the stop-on-enemy chain rule.
    #[must_use]
    pub fn with_stop_on_enemy(mut self, stop: bool) -> Self {
        self.stop_on_enemy = stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.win_condition, WinCondition::Elimination);
        assert!(!config.stop_on_enemy);
        assert_eq!(config, GameConfig::elimination());
    }

    #[test]
    fn test_turn_limit_builder() {
        let config = GameConfig::turn_limit(30).with_stop_on_enemy(true);

        assert_eq!(config.win_condition, WinCondition::TurnLimitMajority);
        assert_eq!(config.turn_limit, 30);
        assert!(config.stop_on_enemy);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::turn_limit(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
