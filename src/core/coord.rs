//! Coordinates on the grid and in the player spaces.
//!
//! The presentation layer forwards pointer events as [`ClickTarget`]
//! values; the engine validates bounds itself, so malformed coordinates
//! are rejections, never panics.

use serde::{Deserialize, Serialize};

use super::config::{GRID_COLS, GRID_ROWS, SPACE_COLS, SPACE_ROWS};
use super::player::PlayerId;

/// A cell on the shared grid. Row 0 is the top edge (player 1's side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    /// Create a grid coordinate. Not bounds-checked; see [`Self::in_bounds`].
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the 4x3 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A slot inside one player's private space.
///
/// Which player's space is meant travels alongside (see
/// [`ClickTarget::Slot`]); the coordinate itself is space-local.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotCoord {
    pub row: usize,
    pub col: usize,
}

impl SlotCoord {
    /// Create a slot coordinate. Not bounds-checked; see [`Self::in_bounds`].
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies in a 2x3 player space.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SPACE_ROWS && self.col < SPACE_COLS
    }
}

/// A pointer target forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// A cell on the shared grid.
    Grid(GridCoord),
    /// A slot in `player`'s space.
    Slot { player: PlayerId, slot: SlotCoord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_bounds() {
        assert!(GridCoord::new(0, 0).in_bounds());
        assert!(GridCoord::new(3, 2).in_bounds());
        assert!(!GridCoord::new(4, 0).in_bounds());
        assert!(!GridCoord::new(0, 3).in_bounds());
    }

    #[test]
    fn test_slot_bounds() {
        assert!(SlotCoord::new(0, 0).in_bounds());
        assert!(SlotCoord::new(1, 2).in_bounds());
        assert!(!SlotCoord::new(2, 0).in_bounds());
        assert!(!SlotCoord::new(0, 3).in_bounds());
    }

    #[test]
    fn test_click_target_serde() {
        let click = ClickTarget::Slot {
            player: PlayerId::ONE,
            slot: SlotCoord::new(1, 2),
        };
        let json = serde_json::to_string(&click).unwrap();
        let deserialized: ClickTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(click, deserialized);
    }
}
