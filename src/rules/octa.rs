//! Octagonal arrow-capture rules.

use tracing::{debug, info, instrument};

use super::chain::{run_chain, MoveOutcome};
use super::engine::{GameLogic, GameResult};
use crate::board::{Board, CellCounts};
use crate::core::{Coordinate, GameConfig, Player, WinCondition};
use crate::error::RuleError;

/// Rule engine for one game.
///
/// Owns the board and is its only writer once play starts. Players are
/// switched by the caller; `make_move` never does it implicitly.
///
/// ```
/// use octa_core::board::{Board, GridType};
/// use octa_core::core::{CellState, Coordinate, Direction, GameConfig, Player};
/// use octa_core::rules::{GameLogic, RuleEngine};
///
/// let board = Board::with_arrows(2, GridType::Octagonal, |_| Direction::South);
/// let mut engine = RuleEngine::new(board, Player::One, GameConfig::elimination());
///
/// let origin = engine.board_mut().cell_mut(Coordinate::origin()).unwrap();
/// origin.set_owner(CellState::Player1);
/// origin.set_arrow(Direction::North);
///
/// let outcome = engine.make_move(Coordinate::origin(), Player::One).unwrap();
/// assert_eq!(outcome.source_arrow, Direction::NorthEast);
/// assert_eq!(engine.board().get_cell(1, 1).unwrap().owner(), CellState::Player1);
/// ```
#[derive(Clone, Debug)]
pub struct RuleEngine {
    board: Board,
    current_player: Player,
    turn_count: u32,
    config: GameConfig,
    stop_on_enemy: bool,
    result: Option<GameResult>,
}

impl RuleEngine {
    /// Create an engine for a fresh game.
    #[must_use]
    pub fn new(board: Board, starting_player: Player, config: GameConfig) -> Self {
        Self {
            board,
            current_player: starting_player,
            turn_count: 0,
            stop_on_enemy: config.stop_on_enemy,
            config,
            result: None,
        }
    }

    /// Mutable board access for initial setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check if chains halt at player-owned cells.
    #[must_use]
    pub fn stop_on_enemy(&self) -> bool {
        self.stop_on_enemy
    }

    fn check_elimination(&self, counts: &CellCounts) -> Option<GameResult> {
        // An empty opening board is not an elimination.
        if self.turn_count == 0 {
            return None;
        }

        match (counts.player_one, counts.player_two) {
            (0, n) if n > 0 => Some(GameResult::win(
                Player::Two,
                format!("{} wins by elimination", Player::Two),
            )),
            (n, 0) if n > 0 => Some(GameResult::win(
                Player::One,
                format!("{} wins by elimination", Player::One),
            )),
            _ => None,
        }
    }

    fn check_turn_limit(&self, counts: &CellCounts) -> Option<GameResult> {
        if self.turn_count < self.config.turn_limit {
            return None;
        }

        let (one, two) = (counts.player_one, counts.player_two);
        let result = match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::win(
                Player::One,
                format!("{} wins by majority ({one} cells to {two})", Player::One),
            ),
            std::cmp::Ordering::Less => GameResult::win(
                Player::Two,
                format!("{} wins by majority ({two} cells to {one})", Player::Two),
            ),
            std::cmp::Ordering::Equal => GameResult::tie(format!(
                "Tie at turn limit: both players control {one} cells"
            )),
        };
        Some(result)
    }
}

impl GameLogic for RuleEngine {
    fn board(&self) -> &Board {
        &self.board
    }

    fn is_valid_move(&self, coordinate: Coordinate, player: Player) -> bool {
        self.board
            .cell(coordinate)
            .is_some_and(|cell| cell.owner() == player.cell_state())
    }

    #[instrument(skip(self), fields(turn = self.turn_count))]
    fn make_move(
        &mut self,
        coordinate: Coordinate,
        player: Player,
    ) -> Result<MoveOutcome, RuleError> {
        let source = match self.board.cell_id(coordinate) {
            Some(id) if self.is_valid_move(coordinate, player) => id,
            _ => return Err(RuleError::InvalidMove { coordinate, player }),
        };

        let outcome = run_chain(&mut self.board, source, player, self.stop_on_enemy);
        self.turn_count += 1;

        debug!(
            captured = outcome.captured_count(),
            stop = ?outcome.stop,
            "move applied"
        );
        Ok(outcome)
    }

    fn is_game_over(&mut self) -> bool {
        if self.result.is_some() {
            return true;
        }

        let counts = self.board.tally();
        let decided = match self.config.win_condition {
            WinCondition::Elimination => self.check_elimination(&counts),
            WinCondition::TurnLimitMajority => self.check_turn_limit(&counts),
        };

        match decided {
            Some(result) => {
                info!(turn = self.turn_count, reason = %result.reason, "game decided");
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    fn game_result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn turn_count(&self) -> u32 {
        self.turn_count
    }
}
