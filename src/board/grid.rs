//! The shared 4x3 grid.
//!
//! Cells hold at most one card. Barriers are structurally excluded from
//! two operations (they cannot be armed as a move source and cannot be
//! the destination of a swap), but those checks live in the session
//! protocol; the grid itself is a dumb container with queries.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{GameRng, GridCoord, PlayerId, GRID_COLS, GRID_ROWS};

/// The shared grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Card>; GRID_COLS]; GRID_ROWS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal a full board: all 12 cells drawn fresh, row-major.
    ///
    /// Row-major order matters for seed-reproducible deals.
    #[must_use]
    pub fn deal(deck: &mut Deck, rng: &mut GameRng) -> Self {
        let mut board = Self::empty();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                board.cells[row][col] = Some(deck.draw(rng));
            }
        }
        board
    }

    /// The board row adjacent to `player`'s space, the only row that
    /// player may extract from.
    #[must_use]
    pub const fn edge_row(player: PlayerId) -> usize {
        match player.index() {
            0 => GRID_ROWS - 1,
            _ => 0,
        }
    }

    /// Card at `at`, if any. Out-of-bounds reads as empty.
    #[must_use]
    pub fn get(&self, at: GridCoord) -> Option<Card> {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.row][at.col]
    }

    /// Overwrite the cell at `at`.
    pub fn set(&mut self, at: GridCoord, card: Option<Card>) {
        self.cells[at.row][at.col] = card;
    }

    /// Remove and return the card at `at`.
    pub fn take(&mut self, at: GridCoord) -> Option<Card> {
        self.cells[at.row][at.col].take()
    }

    /// Exchange the contents of two cells.
    pub fn swap(&mut self, a: GridCoord, b: GridCoord) {
        let tmp = self.cells[a.row][a.col];
        self.cells[a.row][a.col] = self.cells[b.row][b.col];
        self.cells[b.row][b.col] = tmp;
    }

    #[must_use]
    pub fn is_barrier(&self, at: GridCoord) -> bool {
        self.get(at).is_some_and(Card::is_barrier)
    }

    #[must_use]
    pub fn is_empty(&self, at: GridCoord) -> bool {
        at.in_bounds() && self.cells[at.row][at.col].is_none()
    }

    /// Occupied cells in `col`.
    #[must_use]
    pub fn occupied_in_column(&self, col: usize) -> usize {
        (0..GRID_ROWS)
            .filter(|&row| self.cells[row][col].is_some())
            .count()
    }

    /// Occupied cells on the whole board.
    #[must_use]
    pub fn occupied(&self) -> usize {
        (0..GRID_COLS).map(|col| self.occupied_in_column(col)).sum()
    }

    /// Coordinates of every barrier on the board, row-major.
    pub fn barrier_positions(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..GRID_ROWS).flat_map(move |row| {
            (0..GRID_COLS)
                .map(move |col| GridCoord::new(row, col))
                .filter(move |&at| self.is_barrier(at))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, DeckSpec};

    fn dealt_board(seed: u64) -> Board {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::new(DeckSpec::standard(), &mut rng);
        Board::deal(&mut deck, &mut rng)
    }

    #[test]
    fn test_deal_fills_every_cell() {
        let board = dealt_board(42);
        assert_eq!(board.occupied(), GRID_ROWS * GRID_COLS);
    }

    #[test]
    fn test_edge_rows() {
        assert_eq!(Board::edge_row(PlayerId::ZERO), 3);
        assert_eq!(Board::edge_row(PlayerId::ONE), 0);
    }

    #[test]
    fn test_swap() {
        let mut board = Board::empty();
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 2);
        board.set(a, Some(Card::new(CardKind::Attack, 1)));
        board.set(b, Some(Card::new(CardKind::Shield, 1)));

        board.swap(a, b);

        assert_eq!(board.get(a), Some(Card::new(CardKind::Shield, 1)));
        assert_eq!(board.get(b), Some(Card::new(CardKind::Attack, 1)));
    }

    #[test]
    fn test_swap_with_empty_cell() {
        let mut board = Board::empty();
        let a = GridCoord::new(1, 1);
        let b = GridCoord::new(2, 1);
        board.set(a, Some(Card::new(CardKind::Boost, 1)));

        board.swap(a, b);

        assert!(board.is_empty(a));
        assert_eq!(board.get(b), Some(Card::new(CardKind::Boost, 1)));
    }

    #[test]
    fn test_out_of_bounds_reads() {
        let board = dealt_board(42);
        let outside = GridCoord::new(9, 9);

        assert_eq!(board.get(outside), None);
        assert!(!board.is_barrier(outside));
        assert!(!board.is_empty(outside));
    }

    #[test]
    fn test_barrier_queries() {
        let mut board = Board::empty();
        let at = GridCoord::new(2, 1);
        board.set(at, Some(Card::new(CardKind::Barrier, 0)));

        assert!(board.is_barrier(at));
        assert!(!board.is_barrier(GridCoord::new(0, 0)));
        assert_eq!(board.barrier_positions().collect::<Vec<_>>(), vec![at]);
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(dealt_board(7), dealt_board(7));
        assert_ne!(dealt_board(7), dealt_board(8));
    }
}
