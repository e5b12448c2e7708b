//! Move providers.

use std::collections::VecDeque;

use crate::board::Board;
use crate::core::{Coordinate, Player};

/// Supplies the next coordinate for a player.
///
/// Returning `None` means the player has no move to offer; the session then
/// stops without changing turns.
pub trait MoveProvider {
    fn next_move(&mut self, player: Player, board: &Board) -> Option<Coordinate>;
}

impl<F> MoveProvider for F
where
    F: FnMut(Player, &Board) -> Option<Coordinate>,
{
    fn next_move(&mut self, player: Player, board: &Board) -> Option<Coordinate> {
        self(player, board)
    }
}

/// Plays a fixed list of coordinates in order, regardless of player.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Coordinate>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveProvider for ScriptedMoves {
    fn next_move(&mut self, _player: Player, _board: &Board) -> Option<Coordinate> {
        self.moves.pop_front()
    }
}
