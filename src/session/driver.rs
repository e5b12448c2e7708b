//! Turn loop.

use tracing::{debug, warn};

use super::provider::MoveProvider;
use crate::core::Player;
use crate::error::RuleError;
use crate::rules::{GameLogic, GameResult, MoveOutcome};

/// What happened on one call to `GameSession::play_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move applied; the turn passed to the other player.
    Moved { player: Player, outcome: MoveOutcome },
    /// Move refused; same player to move, board unchanged.
    Rejected { player: Player, error: RuleError },
    /// Provider had nothing to play.
    NoMove { player: Player },
    /// Game already decided; nothing was asked of the provider.
    GameOver(GameResult),
}

impl TurnOutcome {
    /// Check if this outcome ends a `run`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::NoMove { .. } | TurnOutcome::GameOver(_))
    }
}

/// Drives a game one turn at a time.
///
/// The session owns the rules. Board access for rendering goes through
/// `logic()`.
#[derive(Clone, Debug)]
pub struct GameSession<L> {
    logic: L,
}

impl<L: GameLogic> GameSession<L> {
    pub fn new(logic: L) -> Self {
        Self { logic }
    }

    #[must_use]
    pub fn logic(&self) -> &L {
        &self.logic
    }

    /// Give back the rules, e.g. to inspect the final board.
    pub fn into_inner(self) -> L {
        self.logic
    }

    /// Play a single turn for the current player.
    pub fn play_turn(&mut self, provider: &mut impl MoveProvider) -> TurnOutcome {
        if self.logic.is_game_over() {
            if let Some(result) = self.logic.game_result() {
                return TurnOutcome::GameOver(result.clone());
            }
        }

        let player = self.logic.current_player();
        let Some(coordinate) = provider.next_move(player, self.logic.board()) else {
            debug!(%player, "no move offered");
            return TurnOutcome::NoMove { player };
        };

        match self.logic.make_move(coordinate, player) {
            Ok(outcome) => {
                self.logic.switch_player();
                TurnOutcome::Moved { player, outcome }
            }
            Err(error) => {
                warn!(%error, "move rejected");
                TurnOutcome::Rejected { player, error }
            }
        }
    }

    /// Play up to `max_turns` turns, stopping early on game over or no move.
    ///
    /// Returns every turn's outcome in order.
    pub fn run(&mut self, provider: &mut impl MoveProvider, max_turns: usize) -> Vec<TurnOutcome> {
        let mut turns = Vec::new();

        for _ in 0..max_turns {
            let outcome = self.play_turn(provider);
            let done = outcome.is_terminal();
            turns.push(outcome);
            if done {
                break;
            }
        }

        turns
    }

    /// Evaluate the win condition and return the result if decided.
    pub fn result(&mut self) -> Option<&GameResult> {
        self.logic.is_game_over();
        self.logic.game_result()
    }
}
