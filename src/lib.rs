//! # octa-core
//!
//! Rule engine for a two-player territory game on an 8-connected square grid
//! where every cell carries a rotating arrow.
//!
//! ## Rules in Brief
//!
//! 1. **Select**: A player picks a cell they own.
//!
//! 2. **Rotate**: That cell's arrow turns one step clockwise.
//!
//! 3. **Chain**: Starting from the cell the arrow now points at, each
//!    reachable cell is captured, its arrow rotated, and the chain follows
//!    the new arrow. It stops at the board edge, at a cell the mover already
//!    owns, at a cell captured earlier in the same move, or (optionally) at
//!    an opponent cell.
//!
//! 4. **Decide**: The game ends by elimination or by majority at a turn limit.
//!
//! ## Architecture
//!
//! - **Arena Board**: `Board` owns all cells; neighbor links are `CellId`
//!   indices, so the cyclic neighbor graph needs no shared ownership.
//!
//! - **Iterative Chains**: Propagation is a loop with a visited set, bounded
//!   by the cell count.
//!
//! - **Seedable Setup**: Initial arrows come from an injectable `GameRng`
//!   or an explicit per-coordinate function.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, players, RNG, configuration
//! - `board`: Cells, board construction and neighbor linking
//! - `rules`: `GameLogic` trait, `RuleEngine`, results
//! - `session`: Turn driving over a `MoveProvider`
//! - `error`: `RuleError`

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CellState, Coordinate, Direction, GameConfig, GameRng, Player, WinCondition,
};

pub use crate::board::{Board, Cell, CellCounts, CellId, CellView, GridType};

pub use crate::rules::{ChainStop, GameLogic, GameResult, MoveOutcome, RuleEngine};

pub use crate::session::{GameSession, MoveProvider, ScriptedMoves, TurnOutcome};

pub use crate::error::RuleError;
