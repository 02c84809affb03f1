//! Core types: players, RNG, coordinates, configuration, actions, and the
//! aggregate match state.

pub mod action;
pub mod config;
pub mod coord;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{Rules, GRID_COLS, GRID_ROWS, SPACE_COLS, SPACE_ROWS};
pub use coord::{ClickTarget, GridCoord, SlotCoord};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Snapshot};
