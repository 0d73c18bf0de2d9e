//! Grid state: coordinates, cells, and the place operation.
//!
//! The board knows nothing about players beyond the `PlayerId` stored
//! in owned cells, and nothing about turns: turn validation is the
//! controller's job. The only mutations are `place` (requires the
//! target cell be empty) and `reset`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::PlayerId;
use crate::error::BoardError;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 4;

/// A (row, col) coordinate on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single cell: empty or marked by a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by the given player.
    Owned(PlayerId),
}

impl Cell {
    /// Check if the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player whose mark occupies the cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

/// The square grid of cells.
///
/// ## Example
///
/// ```
/// use trigrid::{Board, Cell, Coord, PlayerId};
///
/// let mut board = Board::new();
/// assert!(!board.is_full());
///
/// board.place(Coord::new(1, 2), PlayerId::new(0)).unwrap();
/// assert_eq!(
///     board.get(Coord::new(1, 2)).unwrap(),
///     Cell::Owned(PlayerId::new(0)),
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a coordinate.
    ///
    /// # Errors
    ///
    /// `BoardError::OutOfRange` if the coordinate is off the board.
    /// Out-of-range access indicates a caller bug and is logged.
    pub fn get(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            warn!(%coord, "read of out-of-range coordinate");
            return Err(BoardError::OutOfRange { coord });
        }
        Ok(self.cells[coord.row][coord.col])
    }

    /// Place a player's mark at a coordinate.
    ///
    /// Performs no turn validation; whose turn it is belongs to the
    /// controller.
    ///
    /// # Errors
    ///
    /// `BoardError::OutOfRange` if the coordinate is off the board
    /// (logged, caller bug), `BoardError::CellOccupied` if the cell
    /// already holds a mark (benign rejection).
    pub fn place(&mut self, coord: Coord, player: PlayerId) -> Result<(), BoardError> {
        if !coord.in_bounds() {
            warn!(%coord, %player, "write to out-of-range coordinate");
            return Err(BoardError::OutOfRange { coord });
        }
        if !self.cells[coord.row][coord.col].is_empty() {
            return Err(BoardError::CellOccupied { coord });
        }
        self.cells[coord.row][coord.col] = Cell::Owned(player);
        Ok(())
    }

    /// Remove the mark at an in-bounds coordinate.
    ///
    /// Probe support for the move evaluator's speculative
    /// place-then-undo; not part of the public mutation surface.
    pub(crate) fn retract(&mut self, coord: Coord) {
        self.cells[coord.row][coord.col] = Cell::Empty;
    }

    /// Check if every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Set every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Iterate over all cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord::new(row, col), cell))
        })
    }

    /// Iterate over the coordinates of empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell.owner() {
                    Some(player) => write!(f, "{}", player.0)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
