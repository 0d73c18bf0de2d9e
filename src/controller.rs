//! Turn controller: the game state machine.
//!
//! Owns the board, the roster, the current-turn cursor, and the phase.
//! It is the single writer: every mutation of game state flows through
//! `submit_move`, `set_mode`, or `reset`. Computer turns are applied
//! synchronously through the same path a human move takes; any
//! think-delay the presentation layer wants around them is its own
//! scheduling concern.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::ai::{Heuristic, MovePolicy};
use crate::board::{Board, Cell, Coord};
use crate::core::{GameRng, PlayerId, PlayerMode, Roster};
use crate::error::{BoardError, MoveError};
use crate::rules::{check_win, find_winning_line, Line, Outcome};

/// Game phase: accepting moves, or finished.
///
/// The phase flips to `Ended` exactly once per game instance; no
/// further moves are accepted after that until `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    InProgress,
    /// The game finished with the given outcome.
    Ended(Outcome),
}

impl Phase {
    /// Check if the game has finished.
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}

/// Builder for a [`Game`].
///
/// ## Example
///
/// ```
/// use trigrid::{Game, PlayerId, PlayerMode};
///
/// let game = Game::builder()
///     .seed(42)
///     .mode(PlayerId::new(2), PlayerMode::Computer)
///     .build();
///
/// assert_eq!(game.current_player(), PlayerId::new(0));
/// ```
pub struct GameBuilder {
    roster: Roster,
    seed: Option<u64>,
    policy: Box<dyn MovePolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            roster: Roster::standard(),
            seed: None,
            policy: Box::new(Heuristic),
        }
    }
}

impl GameBuilder {
    /// Create a builder with the standard all-human roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the RNG used by the positional tier. Unseeded games draw
    /// from the operating system.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a seat's starting mode.
    #[must_use]
    pub fn mode(mut self, player: PlayerId, mode: PlayerMode) -> Self {
        self.roster.set_mode(player, mode);
        self
    }

    /// Replace the move policy driving computer seats.
    #[must_use]
    pub fn policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the game. If seat 0 starts in computer mode, its move (and
    /// any computer turns after it) is applied before this returns.
    #[must_use]
    pub fn build(self) -> Game {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut game = Game {
            board: Board::new(),
            roster: self.roster,
            current: 0,
            phase: Phase::InProgress,
            rng,
            policy: self.policy,
        };
        game.run_computer_turns();
        game
    }
}

/// A single game: board, roster, turn cursor, and phase.
pub struct Game {
    board: Board,
    roster: Roster,
    current: usize,
    phase: Phase,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start building a game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// A game with the standard all-human roster and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Submit a human-sourced move for the current player.
    ///
    /// On success the move is applied, the win/tie checks run, and any
    /// computer turns that follow are applied before this returns.
    ///
    /// # Errors
    ///
    /// `MoveError::InvalidTurn` if the game has ended or the current
    /// seat is not in human mode; `MoveError::Board` if the cell is
    /// occupied or the coordinate is off the board. Rejections leave
    /// the game state unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, coord: Coord) -> Result<(), MoveError> {
        if self.phase.is_ended() {
            return Err(MoveError::InvalidTurn);
        }
        if !self.roster.mode(self.current_player()).is_human() {
            return Err(MoveError::InvalidTurn);
        }

        self.apply(coord)?;
        self.run_computer_turns();
        Ok(())
    }

    /// Set a seat's mode. Takes effect immediately: if the game is in
    /// progress and the current seat just became a computer, its turn
    /// is played out before this returns.
    pub fn set_mode(&mut self, player: PlayerId, mode: PlayerMode) {
        self.roster.set_mode(player, mode);
        if self.phase == Phase::InProgress {
            self.run_computer_turns();
        }
    }

    /// Discard the current board and outcome and start over: empty
    /// board, seat 0 to move, `InProgress`. Seat modes are kept. If
    /// seat 0 is a computer, its turn is played out before this
    /// returns.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.phase = Phase::InProgress;
        self.run_computer_turns();
    }

    /// Place the current player's mark and resolve the transition.
    fn apply(&mut self, coord: Coord) -> Result<(), MoveError> {
        let actor = self.current_player();
        self.board.place(coord, actor)?;

        if check_win(&self.board, actor) {
            debug!(%actor, %coord, "winning move");
            self.phase = Phase::Ended(Outcome::Win(actor));
        } else if self.board.is_full() {
            debug!(%coord, "board full, game tied");
            self.phase = Phase::Ended(Outcome::Tie);
        } else {
            self.current = self.roster.next_after(actor).index();
            debug!(%actor, %coord, next = %self.current_player(), "turn advances");
        }
        Ok(())
    }

    /// Play out computer turns until a human's turn or the game ends.
    ///
    /// Re-reads each seat's mode as its turn begins, so mid-game mode
    /// changes take effect on the next turn boundary.
    fn run_computer_turns(&mut self) {
        while self.phase == Phase::InProgress {
            let actor = self.current_player();
            if !self.roster.mode(actor).is_computer() {
                break;
            }

            let chosen = self
                .policy
                .choose(&mut self.board, &self.roster, actor, &mut self.rng);
            let coord = match chosen {
                Ok(coord) => coord,
                Err(err) => {
                    error!(%actor, %err, "move policy failed");
                    break;
                }
            };

            if let Err(err) = self.apply(coord) {
                error!(%actor, %coord, %err, "move policy chose an unplayable cell");
                break;
            }
        }
    }

    // === Collaborator queries ===

    /// The cell at a coordinate.
    ///
    /// # Errors
    ///
    /// `BoardError::OutOfRange` for coordinates off the board.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.board.get(coord)
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The player whose turn it is. Once the game has ended this is
    /// the last seat to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// A seat's current mode.
    #[must_use]
    pub fn mode(&self, player: PlayerId) -> PlayerMode {
        self.roster.mode(player)
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::InProgress => None,
            Phase::Ended(outcome) => Some(outcome),
        }
    }

    /// The winning run for highlighting, derived from the stored
    /// winner rather than turn ordering. `None` while in progress or
    /// after a tie.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        match self.phase {
            Phase::Ended(Outcome::Win(player)) => find_winning_line(&self.board, player),
            _ => None,
        }
    }
}
