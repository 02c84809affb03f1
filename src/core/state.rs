//! The aggregate match state and its read-only snapshot.
//!
//! ## GameState
//!
//! One aggregate per match, explicitly owned by the session: no statics,
//! no ambient access. Component operations (column mechanics, spend
//! resolution, the command protocol) take it as an argument; nothing else
//! holds a reference into it.
//!
//! ## Snapshot
//!
//! The owned, serializable copy handed to the presentation layer after
//! every command. Rendering reads snapshots, never the aggregate.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::Rules;
use super::coord::GridCoord;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, PlayerSpace};
use crate::cards::{Card, Deck};
use crate::rules::Selection;

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The shared grid.
    pub board: Board,

    /// Both private spaces.
    pub spaces: PlayerMap<PlayerSpace>,

    /// Hearts, always within `0..=max_hearts`.
    pub hearts: PlayerMap<u8>,

    /// Turns each player has begun. A player's opening turn is turn 0;
    /// the counter first ticks when their second turn starts.
    pub turn_count: PlayerMap<u32>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Moves left this turn. Swaps and extractions cost one; spends are free.
    pub moves_left: u32,

    /// The two-phase click protocol state.
    pub selection: Selection,

    /// Winner, once decided. Sticky until restart.
    pub outcome: Option<PlayerId>,

    /// Applied-command history (persistent vector, O(1) clone).
    history: Vector<ActionRecord>,

    /// Sequence number within the current turn.
    action_sequence: u32,

    deck: Deck,
    rng: GameRng,
}

impl GameState {
    /// Deal a fresh match: full board, empty spaces, full hearts.
    #[must_use]
    pub fn new(rules: &Rules, mut rng: GameRng) -> Self {
        let mut deck = Deck::new(rules.deck.clone(), &mut rng);
        let board = Board::deal(&mut deck, &mut rng);

        Self {
            board,
            spaces: PlayerMap::with_value(PlayerSpace::empty()),
            hearts: PlayerMap::with_value(rules.max_hearts),
            turn_count: PlayerMap::with_value(0),
            current_player: PlayerId::ZERO,
            moves_left: rules.moves_per_turn,
            selection: Selection::Idle,
            outcome: None,
            history: Vector::new(),
            action_sequence: 0,
            deck,
            rng,
        }
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    // === Deck & RNG ===

    /// Draw from the deck. Total: an exhausted deck rebuilds first.
    pub fn draw_card(&mut self) -> Card {
        self.deck.draw(&mut self.rng)
    }

    /// Cards left before the next deck rebuild.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Fork an independent RNG stream (used to seed the next match).
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Hearts ===

    /// Heal `player` by `amount`, capped at `cap`.
    pub fn heal(&mut self, player: PlayerId, amount: u8, cap: u8) {
        let hearts = &mut self.hearts[player];
        *hearts = hearts.saturating_add(amount).min(cap);
    }

    /// Damage `player` by `amount`, floored at zero.
    pub fn damage(&mut self, player: PlayerId, amount: u8) {
        let hearts = &mut self.hearts[player];
        *hearts = hearts.saturating_sub(amount);
    }

    /// Check hearts for a decided match. The outcome is sticky: once set
    /// it never changes until restart.
    pub fn evaluate_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self.hearts[PlayerId::ZERO] == 0 {
            self.outcome = Some(PlayerId::ONE);
        } else if self.hearts[PlayerId::ONE] == 0 {
            self.outcome = Some(PlayerId::ZERO);
        }
    }

    // === Turn lifecycle ===

    /// Flip the current player, count their incoming turn, and reset the
    /// move budget and the per-turn sequence counter.
    pub fn advance_turn(&mut self, moves_per_turn: u32) {
        self.selection.clear();
        let next = self.current_player.opponent();
        self.current_player = next;
        self.turn_count[next] += 1;
        self.moves_left = moves_per_turn;
        self.action_sequence = 0;
    }

    // === History ===

    /// Record an applied command under the acting player's turn counter.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push_back(ActionRecord::new(
            player,
            action,
            self.turn_count[player],
            sequence,
        ));
    }

    /// The applied-command history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Snapshot ===

    /// Owned copy of everything the presentation layer may observe.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            spaces: self.spaces,
            hearts: self.hearts,
            turn_count: self.turn_count,
            current_player: self.current_player,
            moves_left: self.moves_left,
            selection: self.selection.armed_at(),
            game_over: self.game_over(),
            winner: self.outcome,
        }
    }
}

/// Read-only view of a match, rebuilt after every command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub spaces: PlayerMap<PlayerSpace>,
    pub hearts: PlayerMap<u8>,
    pub turn_count: PlayerMap<u32>,
    pub current_player: PlayerId,
    pub moves_left: u32,
    pub selection: Option<GridCoord>,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}
