//! # switcheroo
//!
//! Rule engine for a two-player, turn-based tile-and-card board game:
//! a shared 4x3 grid flanked by two private 2x3 player spaces.
//!
//! ## Design Principles
//!
//! 1. **One owner, no ambient state**: a [`GameSession`] owns the single
//!    [`GameState`] aggregate; every component operation takes the state
//!    it works on as an explicit argument.
//!
//! 2. **Commands in, snapshots out**: the presentation layer issues
//!    commands and renders from the [`Snapshot`] returned after each one.
//!    It never holds a reference into the aggregate.
//!
//! 3. **Rejections, not panics**: illegal commands (wrong player,
//!    barrier targets, wrong column, exhausted move budget, acting after
//!    game over) come back as [`Rejection`] values with stable reason
//!    codes. Malformed coordinates included.
//!
//! 4. **Deterministic**: one seeded RNG stream per match. The same seed
//!    replays the same deal and every subsequent draw.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, coordinates, rules config, actions, state
//! - `cards`: card kinds and the weighted, self-replenishing deck
//! - `board`: the grid, the player spaces, column gravity and spawn
//! - `rules`: selection protocol, rejections, spend economy, the session

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ClickTarget, GameRng, GameRngState, GameState, GridCoord, PlayerId,
    PlayerMap, Rules, SlotCoord, Snapshot, GRID_COLS, GRID_ROWS, PLAYER_COUNT, SPACE_COLS,
    SPACE_ROWS,
};

pub use crate::board::{shift_toward, spawn_row, Board, PlayerSpace};

pub use crate::cards::{Card, CardKind, Deck, DeckEntry, DeckSpec};

pub use crate::rules::{GameSession, GridTransition, Rejection, Selection};
