//! Column gravity and spawn placement.
//!
//! After an extraction the emptied column compacts toward the acting
//! player's edge. Barriers are walls: no card crosses one, no barrier
//! ever moves, and everything on the far side of the first barrier stays
//! untouched. The replacement card then enters at the cell the compaction
//! vacated (adjacent to that barrier on the player's side, or at the far
//! edge when the column has none), so column occupancy is conserved and a
//! spawn can never land on an occupied cell.

use smallvec::SmallVec;

use super::grid::Board;
use crate::cards::Card;
use crate::core::{GridCoord, PlayerId, GRID_ROWS};

/// Row indices of a column ordered from `player`'s edge outward.
fn rows_from_edge(player: PlayerId) -> SmallVec<[usize; GRID_ROWS]> {
    let mut rows: SmallVec<[usize; GRID_ROWS]> = (0..GRID_ROWS).collect();
    if player == PlayerId::ZERO {
        rows.reverse();
    }
    rows
}

/// Compact `col` toward `player`'s edge, preserving relative order.
///
/// The compaction zone runs from the edge up to (exclusive) the first
/// barrier met scanning away from the edge, or the whole column if there
/// is none.
pub fn shift_toward(board: &mut Board, col: usize, player: PlayerId) {
    let zone: SmallVec<[usize; GRID_ROWS]> = rows_from_edge(player)
        .into_iter()
        .take_while(|&row| !board.is_barrier(GridCoord::new(row, col)))
        .collect();

    let mut cards: SmallVec<[Card; GRID_ROWS]> = SmallVec::new();
    for &row in &zone {
        if let Some(card) = board.take(GridCoord::new(row, col)) {
            cards.push(card);
        }
    }

    let mut refill = cards.into_iter();
    for &row in &zone {
        board.set(GridCoord::new(row, col), refill.next());
    }
}

/// Row where the post-extraction draw enters `col` for `player`.
///
/// No barrier: the far edge, so the card must traverse the whole column
/// on future extractions. Otherwise the cell adjacent to the first
/// barrier on the player's side, exactly where [`shift_toward`] left the
/// gap. A barrier sitting on the edge row itself has no such cell; the
/// far side of the barrier is the fallback.
#[must_use]
pub fn spawn_row(board: &Board, col: usize, player: PlayerId) -> usize {
    let barrier = rows_from_edge(player)
        .into_iter()
        .find(|&row| board.is_barrier(GridCoord::new(row, col)));

    match (player.index(), barrier) {
        (0, None) => 0,
        (_, None) => GRID_ROWS - 1,
        (0, Some(b)) => {
            if b + 1 < GRID_ROWS {
                b + 1
            } else {
                b - 1
            }
        }
        (_, Some(b)) => {
            if b > 0 {
                b - 1
            } else {
                b + 1
            }
        }
    }
}
