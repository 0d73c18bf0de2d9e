//! Speculative single-move search.
//!
//! Answers one question: can `player` win with their very next mark?
//! Used both for the computer player's own win tier and, pointed at an
//! opponent, for blocking detection.

use crate::board::{Board, Coord};
use crate::core::PlayerId;
use crate::rules::check_win;

/// Find the first cell where placing `player`'s mark wins immediately.
///
/// Scans empty cells in row-major order. Each candidate is placed
/// speculatively, checked with `check_win`, and reverted regardless of
/// the result, so the board's net state is unchanged. The exclusive
/// borrow makes the probe indivisible: no other reader can observe the
/// intermediate mark.
pub fn find_winning_move(board: &mut Board, player: PlayerId) -> Option<Coord> {
    let candidates: Vec<Coord> = board.empty_cells().collect();

    for coord in candidates {
        board
            .place(coord, player)
            .expect("candidate cell must be empty");
        let wins = check_win(board, player);
        board.retract(coord);

        if wins {
            return Some(coord);
        }
    }

    None
}
