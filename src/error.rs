//! Error taxonomy for the engine.
//!
//! Rejections a caller can re-prompt on (`CellOccupied`, `InvalidTurn`)
//! are ordinary `Err` values. `OutOfRange` indicates a bug in the calling
//! collaborator and `NoMovesAvailable` a sequencing bug in the turn
//! controller; both are logged at the detection site before propagating.

use crate::board::Coord;

/// Errors from board cell access and mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinate falls outside the grid. Caller bug, never silently ignored.
    #[error("coordinate {coord} is outside the board")]
    OutOfRange {
        /// The offending coordinate.
        coord: Coord,
    },

    /// Target cell already holds a mark.
    #[error("cell {coord} is already occupied")]
    CellOccupied {
        /// The occupied coordinate.
        coord: Coord,
    },
}

/// Errors from submitting a move to the turn controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The board rejected the placement.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Move submitted after the game ended, or for a seat the
    /// submitter does not control.
    #[error("it is not this player's turn to move")]
    InvalidTurn,
}

/// Errors from the computer player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    /// Asked to choose a move on a full board. The turn controller
    /// guarantees a move exists before invoking the policy, so this
    /// indicates a sequencing bug upstream.
    #[error("no empty cells remain to choose from")]
    NoMovesAvailable,
}
