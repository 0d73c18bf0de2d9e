//! Core building blocks: player identity and deterministic RNG.
//!
//! These types carry no game rules. The board, rules, and controller
//! modules build on them.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId, PlayerMode, Roster, PLAYER_COUNT};
pub use rng::GameRng;
