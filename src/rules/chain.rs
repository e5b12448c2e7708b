//! Chain-reaction propagation.
//!
//! A move rotates the source arrow, then walks arrow links from cell to cell,
//! capturing and rotating each one, until a stop condition holds. The walk is
//! a plain loop with a visited set, so its length is bounded by the cell count
//! and stack use is constant.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, CellId};
use crate::core::{Coordinate, Direction, Player};

/// Why a chain reaction ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainStop {
    /// The arrow pointed past the board edge.
    OffBoard,
    /// Reached a cell the mover already owns.
    AlreadyOwned,
    /// Reached a cell captured earlier in the same move.
    AlreadyCaptured,
    /// Reached an opponent cell with stop-on-enemy enabled.
    EnemyCell,
}

/// What a single move did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Selected cell.
    pub source: Coordinate,
    /// Source arrow after its rotation.
    pub source_arrow: Direction,
    /// Captured cells in chain order. Excludes the source.
    pub captured: SmallVec<[Coordinate; 8]>,
    /// Reason the chain ended.
    pub stop: ChainStop,
}

impl MoveOutcome {
    /// Number of cells captured beyond the source.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}

/// Rotate `source` and run its chain reaction for `player`.
///
/// The caller has already validated that `player` owns `source`.
pub(crate) fn run_chain(
    board: &mut Board,
    source: CellId,
    player: Player,
    stop_on_enemy: bool,
) -> MoveOutcome {
    let owner = player.cell_state();

    let origin = board.cell_by_id_mut(source);
    let source_arrow = origin.rotate_arrow();
    let source_coordinate = origin.coordinate();
    let mut next = origin.neighbor(source_arrow);

    let mut captured_this_turn: FxHashSet<CellId> = FxHashSet::default();
    captured_this_turn.insert(source);
    let mut captured: SmallVec<[Coordinate; 8]> = SmallVec::new();

    let stop = loop {
        let Some(id) = next else {
            break ChainStop::OffBoard;
        };
        let cell = board.cell_by_id_mut(id);

        if cell.owner() == owner {
            break ChainStop::AlreadyOwned;
        }
        // Captured cells already match the owner check; this guards revisits
        // should a rule variant stop writing the mover's state.
        if captured_this_turn.contains(&id) {
            break ChainStop::AlreadyCaptured;
        }
        if stop_on_enemy && cell.owner().is_player_owned() {
            break ChainStop::EnemyCell;
        }

        let previous = cell.owner();
        cell.set_owner(owner);
        captured_this_turn.insert(id);
        let arrow = cell.rotate_arrow();
        captured.push(cell.coordinate());

        debug!(
            coordinate = %cell.coordinate(),
            ?previous,
            arrow = %arrow,
            "captured cell"
        );

        next = cell.neighbor(arrow);
    };

    debug!(?stop, captured = captured.len(), "chain ended");

    MoveOutcome {
        source: source_coordinate,
        source_arrow,
        captured,
        stop,
    }
}
