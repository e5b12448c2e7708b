//! Turn driving on top of `GameLogic`.
//!
//! A `GameSession` asks a `MoveProvider` for coordinates and feeds them to
//! the rules one turn at a time. It performs no I/O: prompting and rendering
//! belong to whoever implements `MoveProvider` and reads `TurnOutcome`s.
//!
//! ## Key Types
//!
//! - `MoveProvider`: Source of player moves (closure, script, UI, ...)
//! - `ScriptedMoves`: Fixed queue of coordinates
//! - `GameSession`: Turn loop with player switching
//! - `TurnOutcome`: What happened on one turn

pub mod provider;
pub mod driver;

pub use provider::{MoveProvider, ScriptedMoves};
pub use driver::{GameSession, TurnOutcome};
