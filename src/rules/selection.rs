//! The two-phase click protocol, as an explicit state machine.
//!
//! A first click on the grid arms a cell; the second click completes an
//! action (deselect, swap, or extract). The transition classification is
//! pure and independent of the board, so the table is unit-testable on
//! its own; legality (barriers, occupancy, edge rows) is layered on top
//! by the session.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// Selection state. If armed, the coordinate always refers to an
/// occupied, non-barrier board cell: the session enforces that before
/// arming and nothing can invalidate it while armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No cell armed.
    #[default]
    Idle,
    /// A board cell armed by a first click, awaiting the second.
    Armed(GridCoord),
}

/// What a grid click means given the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridTransition {
    /// Nothing armed: arm the clicked cell.
    Arm,
    /// Re-clicked the armed cell: disarm, free of charge.
    Deselect,
    /// A different cell: swap it with the armed one.
    Swap { from: GridCoord },
}

impl Selection {
    /// The armed coordinate, if any.
    #[must_use]
    pub fn armed_at(self) -> Option<GridCoord> {
        match self {
            Selection::Idle => None,
            Selection::Armed(at) => Some(at),
        }
    }

    /// Drop any armed selection.
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    /// Classify a grid click. Pure protocol; no board legality here.
    #[must_use]
    pub fn grid_transition(self, target: GridCoord) -> GridTransition {
        match self {
            Selection::Idle => GridTransition::Arm,
            Selection::Armed(at) if at == target => GridTransition::Deselect,
            Selection::Armed(at) => GridTransition::Swap { from: at },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_click_arms() {
        let selection = Selection::Idle;
        let at = GridCoord::new(2, 1);

        assert_eq!(selection.grid_transition(at), GridTransition::Arm);
    }

    #[test]
    fn test_same_cell_deselects() {
        let at = GridCoord::new(2, 1);
        let selection = Selection::Armed(at);

        assert_eq!(selection.grid_transition(at), GridTransition::Deselect);
    }

    #[test]
    fn test_other_cell_swaps() {
        let from = GridCoord::new(2, 1);
        let to = GridCoord::new(0, 0);
        let selection = Selection::Armed(from);

        assert_eq!(
            selection.grid_transition(to),
            GridTransition::Swap { from }
        );
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::Armed(GridCoord::new(0, 0));
        selection.clear();

        assert_eq!(selection, Selection::Idle);
        assert_eq!(selection.armed_at(), None);
    }
}
