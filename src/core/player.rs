//! Player identification and the turn roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, a 0-based index into the roster.
//!
//! ## Roster
//!
//! The ordered, fixed list of seats in turn order. Backed by `Vec` for
//! O(1) access and indexable by `PlayerId`. Seat order never changes
//! during a game; only the human/computer mode of a seat may.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of seats in a standard game.
pub const PLAYER_COUNT: usize = 3;

/// Player identifier.
///
/// Player indices are 0-based: the first player to move is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use trigrid::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[2], PlayerId::new(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Whether a seat is driven by a human or by the computer player.
///
/// Mutable at any time, including mid-game; the turn controller
/// re-reads it whenever a turn begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    /// Moves arrive from the external collaborator.
    Human,
    /// Moves are chosen by the engine's move policy.
    Computer,
}

impl PlayerMode {
    /// Check if this seat accepts human-sourced moves.
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, PlayerMode::Human)
    }

    /// Check if this seat is driven by the computer.
    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, PlayerMode::Computer)
    }
}

/// A seat in the turn order: stable id, display symbol, and mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, equal to the seat's position in the roster.
    pub id: PlayerId,
    /// Display symbol for the collaborator to render.
    pub symbol: char,
    /// Human or computer.
    pub mode: PlayerMode,
}

/// The ordered, fixed list of players.
///
/// Turn order cycles through the roster; `next_after` wraps from the
/// last seat back to the first.
///
/// ## Example
///
/// ```
/// use trigrid::{PlayerId, PlayerMode, Roster};
///
/// let roster = Roster::standard();
/// assert_eq!(roster.player_count(), 3);
/// assert_eq!(roster[PlayerId::new(0)].symbol, 'X');
/// assert!(roster.mode(PlayerId::new(2)).is_human());
/// assert_eq!(roster.next_after(PlayerId::new(2)), PlayerId::new(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from display symbols, one seat per symbol.
    ///
    /// All seats start in `Human` mode.
    pub fn new(symbols: &[char]) -> Self {
        assert!(!symbols.is_empty(), "Must have at least 1 player");
        assert!(symbols.len() <= 255, "At most 255 players supported");

        let players = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| Player {
                id: PlayerId::new(i as u8),
                symbol,
                mode: PlayerMode::Human,
            })
            .collect();

        Self { players }
    }

    /// The standard three-seat roster: `X`, `O`, `Δ`, all human.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&['X', 'O', 'Δ'])
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a seat by player ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Get a seat's current mode.
    #[must_use]
    pub fn mode(&self, player: PlayerId) -> PlayerMode {
        self.players[player.index()].mode
    }

    /// Set a seat's mode.
    pub fn set_mode(&mut self, player: PlayerId, mode: PlayerMode) {
        self.players[player.index()].mode = mode;
    }

    /// Iterate over the seats in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// The seat that moves after `player`, wrapping past the last seat.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId::new(((player.index() + 1) % self.players.len()) as u8)
    }

    /// All other seats, in turn order starting from the first seat.
    pub fn opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.player_ids().filter(move |&p| p != player)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
