//! Alignment rules: win and tie detection over the board.
//!
//! A player wins with `WIN_LENGTH` consecutive marks along one of four
//! directions. Detection scans every possible run start rather than
//! assuming the winning run passes through the most recent move, so the
//! result depends only on the board contents.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Coord, BOARD_SIZE};
use crate::core::PlayerId;

/// Number of consecutive same-owner cells required to win.
pub const WIN_LENGTH: usize = 3;

/// A winning run of coordinates, in run order.
pub type Line = SmallVec<[Coord; WIN_LENGTH]>;

/// The four alignment directions, in scan priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right within a row.
    Horizontal,
    /// Top to bottom within a column.
    Vertical,
    /// Top-left towards bottom-right.
    DiagonalRight,
    /// Top-right towards bottom-left.
    DiagonalLeft,
}

impl Direction {
    /// All directions, in the order runs are searched.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    /// Unit step (Δrow, Δcol) along this direction.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (1, -1),
        }
    }

    /// Valid run start positions for this direction.
    ///
    /// Bounded axes range over `[0, BOARD_SIZE - WIN_LENGTH]`; the
    /// perpendicular axis of horizontal/vertical runs over the full
    /// board. Start order is the deterministic scan order used by
    /// `find_winning_line`.
    fn starts(self) -> Box<dyn Iterator<Item = Coord>> {
        const BOUND: usize = BOARD_SIZE - WIN_LENGTH + 1;

        match self {
            Direction::Horizontal => Box::new(
                (0..BOARD_SIZE).flat_map(|row| (0..BOUND).map(move |col| Coord::new(row, col))),
            ),
            Direction::Vertical => Box::new(
                (0..BOARD_SIZE).flat_map(|col| (0..BOUND).map(move |row| Coord::new(row, col))),
            ),
            Direction::DiagonalRight => {
                Box::new((0..BOUND).flat_map(|row| (0..BOUND).map(move |col| Coord::new(row, col))))
            }
            Direction::DiagonalLeft => Box::new((0..BOUND).flat_map(|row| {
                (WIN_LENGTH - 1..BOARD_SIZE).map(move |col| Coord::new(row, col))
            })),
        }
    }

    /// The `WIN_LENGTH` coordinates of the run starting at `start`.
    ///
    /// Only called with starts produced by `starts()`, which keeps the
    /// whole run on the board.
    fn run(self, start: Coord) -> impl Iterator<Item = Coord> {
        let (dr, dc) = self.step();
        (0..WIN_LENGTH as isize).map(move |i| {
            Coord::new(
                (start.row as isize + dr * i) as usize,
                (start.col as isize + dc * i) as usize,
            )
        })
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A single winner.
    Win(PlayerId),
    /// Board filled with no winner.
    Tie,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_win_for(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Win(p) if *p == player)
    }
}

fn owns(board: &Board, coord: Coord, player: PlayerId) -> bool {
    board
        .get(coord)
        .map_or(false, |cell| cell.owner() == Some(player))
}

/// Check whether `player` has a winning run anywhere on the board.
#[must_use]
pub fn check_win(board: &Board, player: PlayerId) -> bool {
    find_winning_line(board, player).is_some()
}

/// Find the first winning run for `player`, if any.
///
/// Deterministic search order: horizontal, vertical, diagonal
/// down-right, diagonal down-left; within each direction, run starts
/// in that direction's scan order. Intended for presentation
/// highlighting; game-state decisions only need `check_win`.
#[must_use]
pub fn find_winning_line(board: &Board, player: PlayerId) -> Option<Line> {
    for direction in Direction::ALL {
        for start in direction.starts() {
            if direction.run(start).all(|coord| owns(board, coord, player)) {
                return Some(direction.run(start).collect());
            }
        }
    }
    None
}

/// Check whether the game is a tie: board full with no winner.
///
/// The controller only consults this after a negative win check, but
/// the standalone answer does not rely on that: a full board where
/// some mark owner has a winning run is not a tie.
#[must_use]
pub fn check_tie(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }

    let owners: FxHashSet<PlayerId> = board.cells().filter_map(|(_, cell)| cell.owner()).collect();
    owners.into_iter().all(|player| !check_win(board, player))
}
