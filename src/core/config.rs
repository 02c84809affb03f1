//! Match configuration.
//!
//! Grid dimensions are compile-time constants (they size the board and
//! player-space arrays). Everything tunable (heart cap, move budget, the
//! attack lock-out, the deck distribution) lives in [`Rules`], fixed at
//! session construction.

use serde::{Deserialize, Serialize};

use crate::cards::DeckSpec;

/// Rows on the shared grid. Row 0 is player 1's edge, row 3 player 0's.
pub const GRID_ROWS: usize = 4;

/// Columns on the shared grid, aligned 1:1 with player-space columns.
pub const GRID_COLS: usize = 3;

/// Rows in each private player space.
pub const SPACE_ROWS: usize = 2;

/// Columns in each private player space.
pub const SPACE_COLS: usize = 3;

/// Tunable match rules.
///
/// Construction-time parameters only; a running session never changes them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rules {
    /// Heart cap and starting total for both players.
    pub max_hearts: u8,

    /// Move budget granted at the start of each turn.
    pub moves_per_turn: u32,

    /// Turns a player must have begun before their Attack cards unlock.
    pub attack_lock_turns: u32,

    /// Weighted deck distribution.
    pub deck: DeckSpec,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_hearts: 3,
            moves_per_turn: 2,
            attack_lock_turns: 2,
            deck: DeckSpec::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();

        assert_eq!(rules.max_hearts, 3);
        assert_eq!(rules.moves_per_turn, 2);
        assert_eq!(rules.attack_lock_turns, 2);
        assert_eq!(rules.deck.total(), 60);
    }

    #[test]
    fn test_rules_serde() {
        let rules = Rules::default();
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: Rules = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.max_hearts, rules.max_hearts);
        assert_eq!(deserialized.deck.total(), rules.deck.total());
    }
}
