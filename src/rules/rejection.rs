//! Recoverable command rejections.
//!
//! Every failure the engine can produce is a rejection, never a panic:
//! the command is refused with a stable machine-readable code plus a
//! display message, and the aggregate is left unchanged except for the
//! documented deselect-on-reject paths.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The match is decided; only restart is accepted.
    GameOver,
    /// Spend attempted from the non-acting player's seat.
    NotYourTurn,
    /// The turn's move budget is exhausted.
    NoMovesLeft,
    /// Coordinate outside the grid or a player space.
    OutOfBounds,
    /// The targeted cell or slot holds no card.
    EmptyCell,
    /// Barriers cannot be armed as a move source.
    BarrierSource,
    /// Barriers cannot be the destination of a swap. Clears the selection.
    BarrierTarget,
    /// A player-space click with no armed selection.
    NothingArmed,
    /// A click into the opponent's space.
    NotYourSpace,
    /// The targeted player-space slot already holds a card.
    SlotOccupied,
    /// Extraction must stay in the armed card's column. Clears the selection.
    ColumnMismatch,
    /// Extraction is only legal from the acting player's edge row.
    /// Clears the selection.
    NotEdgeRow,
    /// Both slots of the space column are occupied. Clears the selection.
    ColumnFull,
    /// Attack cards are locked for each player's first turns.
    AttackLocked { lock_turns: u32 },
    /// The card kind has no spend resolution.
    Unspendable { kind: CardKind },
}

impl Rejection {
    /// Stable machine-readable reason code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Rejection::GameOver => "game_over",
            Rejection::NotYourTurn => "not_your_turn",
            Rejection::NoMovesLeft => "no_moves_left",
            Rejection::OutOfBounds => "out_of_bounds",
            Rejection::EmptyCell => "empty_cell",
            Rejection::BarrierSource => "barrier_source",
            Rejection::BarrierTarget => "barrier_target",
            Rejection::NothingArmed => "nothing_armed",
            Rejection::NotYourSpace => "not_your_space",
            Rejection::SlotOccupied => "slot_occupied",
            Rejection::ColumnMismatch => "column_mismatch",
            Rejection::NotEdgeRow => "not_edge_row",
            Rejection::ColumnFull => "column_full",
            Rejection::AttackLocked { .. } => "attack_locked",
            Rejection::Unspendable { .. } => "unspendable",
        }
    }

    /// Human-readable message for display.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Rejection::GameOver => "The game is over".to_string(),
            Rejection::NotYourTurn => "Not your turn".to_string(),
            Rejection::NoMovesLeft => "No moves left this turn".to_string(),
            Rejection::OutOfBounds => "That spot is off the board".to_string(),
            Rejection::EmptyCell => "Nothing there".to_string(),
            Rejection::BarrierSource | Rejection::BarrierTarget => {
                "Can't move barriers!".to_string()
            }
            Rejection::NothingArmed => "Select a tile first".to_string(),
            Rejection::NotYourSpace => "That's not your play space".to_string(),
            Rejection::SlotOccupied => "That slot is taken".to_string(),
            Rejection::ColumnMismatch => "Must move to same column!".to_string(),
            Rejection::NotEdgeRow => "Can only move from edge row!".to_string(),
            Rejection::ColumnFull => "Column is full!".to_string(),
            Rejection::AttackLocked { lock_turns } => {
                format!("No attacks allowed in first {lock_turns} turns!")
            }
            Rejection::Unspendable { kind } => {
                format!("{kind:?} cards can't be spent")
            }
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Rejection {}
