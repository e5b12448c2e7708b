//! Move validation, chain reactions, and win conditions.
//!
//! `GameLogic` is the seam between the core and whatever drives turns.
//! `RuleEngine` is the octagonal arrow-capture implementation.
//!
//! The orchestration layer calls into `GameLogic` but never mutates
//! cells directly once a game has started.

pub mod engine;
pub mod chain;
pub mod octa;

pub use engine::{GameLogic, GameResult};
pub use chain::{ChainStop, MoveOutcome};
pub use octa::RuleEngine;
