//! The session engine: command validation and orchestration.
//!
//! `GameSession` is the single owner of a match's [`GameState`]. The
//! presentation layer drives it through four commands (select-or-act,
//! spend, end-turn, restart) and renders from the [`Snapshot`] returned
//! after each one. Commands are processed synchronously, one at a time,
//! to completion; every illegal command comes back as a [`Rejection`]
//! that names its reason.

use crate::board::{shift_toward, spawn_row, Board};
use crate::cards::CardKind;
use crate::core::{
    Action, ActionRecord, ClickTarget, GameRng, GameState, GridCoord, PlayerId, Rules, SlotCoord,
    Snapshot,
};

use super::economy::resolve_spend;
use super::rejection::Rejection;
use super::selection::{GridTransition, Selection};

/// One match, from deal to restart.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: Rules,
    state: GameState,
}

impl GameSession {
    /// Start a session with the default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    /// Start a session with custom rules.
    #[must_use]
    pub fn with_rules(seed: u64, rules: Rules) -> Self {
        let state = GameState::new(&rules, GameRng::new(seed));
        Self { rules, state }
    }

    /// Wrap an already-built aggregate (scenario setup, resumption).
    #[must_use]
    pub fn from_state(rules: Rules, state: GameState) -> Self {
        Self { rules, state }
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Read-only view of the aggregate.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current snapshot, independent of any command.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Applied-command history, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history().iter()
    }

    // === Commands ===

    /// First or second click of the two-phase protocol, for the acting
    /// player. Requires a live match and a move left in the budget.
    pub fn select_or_act(&mut self, target: ClickTarget) -> Result<Snapshot, Rejection> {
        if self.state.game_over() {
            return Err(Rejection::GameOver);
        }
        if self.state.moves_left == 0 {
            return Err(Rejection::NoMovesLeft);
        }

        match target {
            ClickTarget::Grid(at) => self.grid_click(at)?,
            ClickTarget::Slot { player, slot } => self.slot_click(player, slot)?,
        }

        Ok(self.state.snapshot())
    }

    /// Spend a card resting in `player`'s space. Never consumes a move.
    pub fn spend_card(&mut self, player: PlayerId, slot: SlotCoord) -> Result<Snapshot, Rejection> {
        if self.state.game_over() {
            return Err(Rejection::GameOver);
        }
        if player != self.state.current_player {
            return Err(Rejection::NotYourTurn);
        }
        if !slot.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }

        let card = resolve_spend(&mut self.state, &self.rules, player, slot)?;
        self.state.record(player, Action::Spend { slot, card });

        Ok(self.state.snapshot())
    }

    /// Hand the turn over. Legal with moves still in the budget; a no-op
    /// once the match is decided.
    pub fn end_turn(&mut self) -> Snapshot {
        if !self.state.game_over() {
            self.state.record(self.state.current_player, Action::EndTurn);
            self.state.advance_turn(self.rules.moves_per_turn);
        }
        self.state.snapshot()
    }

    /// Tear the match down and deal a fresh one.
    ///
    /// The new match draws from an RNG stream forked off the old one, so
    /// a session stays deterministic across restarts.
    pub fn restart(&mut self) -> Snapshot {
        let rng = self.state.fork_rng();
        self.state = GameState::new(&self.rules, rng);
        self.state.snapshot()
    }

    // === Protocol internals ===

    fn grid_click(&mut self, at: GridCoord) -> Result<(), Rejection> {
        if !at.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }

        match self.state.selection.grid_transition(at) {
            GridTransition::Arm => {
                if self.state.board.is_barrier(at) {
                    return Err(Rejection::BarrierSource);
                }
                if self.state.board.is_empty(at) {
                    return Err(Rejection::EmptyCell);
                }
                self.state.selection = Selection::Armed(at);
                self.state.record(self.state.current_player, Action::Select(at));
                Ok(())
            }
            GridTransition::Deselect => {
                self.state.selection.clear();
                self.state
                    .record(self.state.current_player, Action::Deselect(at));
                Ok(())
            }
            GridTransition::Swap { from } => {
                if self.state.board.is_barrier(at) {
                    self.state.selection.clear();
                    return Err(Rejection::BarrierTarget);
                }
                self.state.board.swap(from, at);
                self.state.selection.clear();
                self.state.moves_left -= 1;
                self.state
                    .record(self.state.current_player, Action::Swap { from, to: at });
                Ok(())
            }
        }
    }

    fn slot_click(&mut self, owner: PlayerId, slot: SlotCoord) -> Result<(), Rejection> {
        if !slot.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }

        // Without an armed board cell, or aimed at the wrong space, the
        // click is ignored: rejected with the selection left as it was.
        let from = self.state.selection.armed_at().ok_or(Rejection::NothingArmed)?;
        let player = self.state.current_player;
        if owner != player {
            return Err(Rejection::NotYourSpace);
        }

        // Protocol violations clear the selection. Column mismatch is
        // reported ahead of the edge-row check, matching the original.
        if from.col != slot.col {
            self.state.selection.clear();
            return Err(Rejection::ColumnMismatch);
        }
        if from.row != Board::edge_row(player) {
            self.state.selection.clear();
            return Err(Rejection::NotEdgeRow);
        }
        // A full column rejects the extraction outright; an occupied slot
        // in a column that still has room is just an ignored click.
        if self.state.spaces[owner].is_column_full(owner, slot.col) {
            self.state.selection.clear();
            return Err(Rejection::ColumnFull);
        }
        if self.state.spaces[owner].get(slot).is_some() {
            return Err(Rejection::SlotOccupied);
        }

        match self.extract(player, slot.col) {
            Ok(()) => {
                self.state.selection.clear();
                self.state.moves_left -= 1;
                self.state.record(player, Action::Extract { col: slot.col });
                Ok(())
            }
            Err(rejection) => {
                self.state.selection.clear();
                Err(rejection)
            }
        }
    }

    /// The extraction pipeline: lift the edge card into the space, apply
    /// any arrival effect, compact the column, spawn a replacement.
    fn extract(&mut self, player: PlayerId, col: usize) -> Result<(), Rejection> {
        let edge = GridCoord::new(Board::edge_row(player), col);
        let card = self.state.board.get(edge).ok_or(Rejection::EmptyCell)?;

        let slot = self.state.spaces[player]
            .open_slot(player, col)
            .ok_or(Rejection::ColumnFull)?;

        self.state.spaces[player].set(slot, Some(card));
        self.state.board.take(edge);

        // An Instant is consumed on arrival; it never rests.
        if card.kind == CardKind::Instant {
            self.state.heal(player, card.value, self.rules.max_hearts);
            self.state.spaces[player].take(slot);
        }

        shift_toward(&mut self.state.board, col, player);

        let spawn = GridCoord::new(spawn_row(&self.state.board, col, player), col);
        let drawn = self.state.draw_card();
        self.state.board.set(spawn, Some(drawn));

        Ok(())
    }
}
