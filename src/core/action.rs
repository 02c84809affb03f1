//! Applied commands and the match history.
//!
//! Every successfully applied command is appended to the aggregate's
//! history as an [`ActionRecord`]. The history is the engine's
//! observability surface: replay, debugging, and presentation-side
//! messaging all read from it.

use serde::{Deserialize, Serialize};

use super::coord::{GridCoord, SlotCoord};
use super::player::PlayerId;
use crate::cards::Card;

/// A successfully applied command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Armed a board cell (first click).
    Select(GridCoord),
    /// Cleared an armed selection by re-clicking it. Free of charge.
    Deselect(GridCoord),
    /// Swapped two board cells. Costs a move.
    Swap { from: GridCoord, to: GridCoord },
    /// Pulled the edge card of `col` into the acting player's space.
    /// Costs a move.
    Extract { col: usize },
    /// Spent a resting card from the acting player's space.
    Spend { slot: SlotCoord, card: Card },
    /// Ended the turn.
    EndTurn,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// The acting player's turn counter when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
