//! Private player spaces.
//!
//! Each player owns a 2x3 matrix whose columns align 1:1 with the grid.
//! Cards arrive only through extraction and leave only through spend
//! resolution (or instant consumption on arrival). Arriving cards stack
//! toward the board: the slot scan starts at the row farthest from the
//! grid, so the second card in a column lands nearest it.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, SlotCoord, SPACE_COLS, SPACE_ROWS};

/// One player's private space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpace {
    slots: [[Option<Card>; SPACE_COLS]; SPACE_ROWS],
}

/// Slot rows for `owner`, farthest-from-the-board first.
///
/// Player 0's space hangs below the grid (its row 0 touches the grid);
/// player 1's space sits above it (its row 1 touches the grid).
fn fill_order(owner: PlayerId) -> [usize; SPACE_ROWS] {
    match owner.index() {
        0 => [SPACE_ROWS - 1, 0],
        _ => [0, SPACE_ROWS - 1],
    }
}

impl PlayerSpace {
    /// An empty space.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Card at `at`, if any. Out-of-bounds reads as empty.
    #[must_use]
    pub fn get(&self, at: SlotCoord) -> Option<Card> {
        if !at.in_bounds() {
            return None;
        }
        self.slots[at.row][at.col]
    }

    /// Overwrite the slot at `at`.
    pub fn set(&mut self, at: SlotCoord, card: Option<Card>) {
        self.slots[at.row][at.col] = card;
    }

    /// Remove and return the card at `at`.
    pub fn take(&mut self, at: SlotCoord) -> Option<Card> {
        self.slots[at.row][at.col].take()
    }

    /// First open slot in `col` for `owner`, scanning away from the board.
    ///
    /// `None` means the column is full.
    #[must_use]
    pub fn open_slot(&self, owner: PlayerId, col: usize) -> Option<SlotCoord> {
        fill_order(owner)
            .into_iter()
            .map(|row| SlotCoord::new(row, col))
            .find(|&at| self.slots[at.row][at.col].is_none())
    }

    #[must_use]
    pub fn is_column_full(&self, owner: PlayerId, col: usize) -> bool {
        self.open_slot(owner, col).is_none()
    }

    /// Every resting card with its slot, row-major.
    pub fn cards(&self) -> impl Iterator<Item = (SlotCoord, Card)> + '_ {
        (0..SPACE_ROWS).flat_map(move |row| {
            (0..SPACE_COLS).filter_map(move |col| {
                self.slots[row][col].map(|card| (SlotCoord::new(row, col), card))
            })
        })
    }
}
