//! Core value types: coordinates, directions, players, RNG, configuration.
//!
//! Everything here is plain data. The board and rule engine build on these
//! types but never require the caller to know about cells or arenas.

pub mod coord;
pub mod direction;
pub mod player;
pub mod rng;
pub mod config;

pub use coord::Coordinate;
pub use direction::Direction;
pub use player::{CellState, Player};
pub use rng::GameRng;
pub use config::{GameConfig, WinCondition};
