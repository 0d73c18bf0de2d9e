//! # trigrid
//!
//! A three-player grid alignment game engine. Players alternate
//! placing marks on a 4×4 grid; three consecutive same-owner marks
//! along a row, column, or diagonal win.
//!
//! ## Design Principles
//!
//! 1. **Core only**: The engine owns game state and decisions. It
//!    returns data (outcomes, coordinates, winning runs) and never
//!    touches a display surface. Rendering, input wiring, and
//!    think-delays belong to the calling collaborator.
//!
//! 2. **Single writer**: The turn controller exclusively owns the
//!    board and phase. Rules and the move evaluator read; the
//!    evaluator's speculative probe runs under an exclusive borrow.
//!
//! 3. **Deterministic by seed**: The only randomness is the computer
//!    player's positional tier, drawn from an injected seedable RNG.
//!    Same seed, same submitted moves, same transcript.
//!
//! ## Modules
//!
//! - `core`: Player identity, roster, deterministic RNG
//! - `board`: Grid state and the place operation
//! - `rules`: Win/tie detection across four directions
//! - `evaluator`: Speculative "can this player win now?" search
//! - `ai`: Three-tier heuristic move policy (win > block > positional)
//! - `controller`: Turn state machine driving the pieces above
//! - `error`: Error taxonomy
//!
//! ## Example
//!
//! ```
//! use trigrid::{Coord, Game, Phase, PlayerId, PlayerMode};
//!
//! let mut game = Game::builder()
//!     .seed(42)
//!     .mode(PlayerId::new(1), PlayerMode::Computer)
//!     .mode(PlayerId::new(2), PlayerMode::Computer)
//!     .build();
//!
//! // The human at seat 0 moves; both computer seats answer before
//! // control returns.
//! game.submit_move(Coord::new(1, 1))?;
//! assert_eq!(game.current_player(), PlayerId::new(0));
//! assert_eq!(game.phase(), Phase::InProgress);
//! # Ok::<(), trigrid::MoveError>(())
//! ```

pub mod ai;
pub mod board;
pub mod controller;
pub mod core;
pub mod error;
pub mod evaluator;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerId, PlayerMode, Roster, PLAYER_COUNT};

pub use crate::board::{Board, Cell, Coord, BOARD_SIZE};

pub use crate::error::{AiError, BoardError, MoveError};

pub use crate::rules::{
    check_tie, check_win, find_winning_line, Direction, Line, Outcome, WIN_LENGTH,
};

pub use crate::evaluator::find_winning_move;

pub use crate::ai::{Heuristic, MovePolicy};

pub use crate::controller::{Game, GameBuilder, Phase};
