//! Computer player: heuristic move selection.
//!
//! The policy is single-ply: it never searches ahead, it only ranks
//! the immediate move. Strict priority order:
//!
//! 1. **Win**: take an immediately winning cell.
//! 2. **Block**: deny the first opponent (in roster order) an
//!    immediately winning cell. Only one threat is blocked per turn;
//!    simultaneous multi-opponent threats are not resolved.
//! 3. **Positional**: prefer the central 2×2 cells, uniformly at
//!    random; otherwise any empty cell, uniformly at random.

use tracing::{debug, error};

use crate::board::{Board, Coord, BOARD_SIZE};
use crate::core::{GameRng, PlayerId, Roster};
use crate::error::AiError;
use crate::evaluator::find_winning_move;

/// Move selection policy for computer-driven seats.
///
/// The randomness source is passed in so callers control determinism;
/// the controller hands the policy its own seeded RNG.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `actor` on the given board.
    ///
    /// Must return an empty cell. The board is borrowed mutably for
    /// the duration so speculative probes stay indivisible; the net
    /// board state is unchanged.
    ///
    /// # Errors
    ///
    /// `AiError::NoMovesAvailable` if the board has no empty cell;
    /// the caller is expected to guarantee a move exists.
    fn choose(
        &self,
        board: &mut Board,
        roster: &Roster,
        actor: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Coord, AiError>;
}

/// The three-tier win/block/positional heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

/// Central cells are the middle 2×2 sub-grid.
fn is_central(coord: Coord) -> bool {
    const LO: usize = BOARD_SIZE / 2 - 1;
    const HI: usize = BOARD_SIZE / 2;

    (LO..=HI).contains(&coord.row) && (LO..=HI).contains(&coord.col)
}

impl MovePolicy for Heuristic {
    fn choose(
        &self,
        board: &mut Board,
        roster: &Roster,
        actor: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Coord, AiError> {
        let empty: Vec<Coord> = board.empty_cells().collect();
        if empty.is_empty() {
            error!(%actor, "computer player invoked on a full board");
            return Err(AiError::NoMovesAvailable);
        }

        if let Some(coord) = find_winning_move(board, actor) {
            debug!(%actor, %coord, "taking winning move");
            return Ok(coord);
        }

        for opponent in roster.opponents(actor) {
            if let Some(coord) = find_winning_move(board, opponent) {
                debug!(%actor, %opponent, %coord, "blocking opponent threat");
                return Ok(coord);
            }
        }

        let central: Vec<Coord> = empty.iter().copied().filter(|&c| is_central(c)).collect();
        let pool = if central.is_empty() { &empty } else { &central };
        let coord = *rng.choose(pool).expect("pool is non-empty");
        debug!(%actor, %coord, central = !central.is_empty(), "positional move");
        Ok(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, player: PlayerId, coords: &[(usize, usize)]) {
        for &(row, col) in coords {
            board.place(Coord::new(row, col), player).unwrap();
        }
    }

    fn choose(board: &mut Board, actor: PlayerId, seed: u64) -> Coord {
        let roster = Roster::standard();
        let mut rng = GameRng::new(seed);
        Heuristic
            .choose(board, &roster, actor, &mut rng)
            .expect("board has empty cells")
    }

    #[test]
    fn test_win_tier() {
        let actor = PlayerId::new(0);
        let mut board = Board::new();
        place_all(&mut board, actor, &[(0, 0), (0, 1)]);

        assert_eq!(choose(&mut board, actor, 42), Coord::new(0, 2));
    }

    #[test]
    fn test_win_beats_block() {
        let actor = PlayerId::new(0);
        let mut board = Board::new();
        place_all(&mut board, actor, &[(3, 1), (3, 2)]);
        // An opponent also threatens, but the own win comes first.
        place_all(&mut board, PlayerId::new(1), &[(0, 0), (0, 1)]);

        assert_eq!(choose(&mut board, actor, 42), Coord::new(3, 0));
    }

    #[test]
    fn test_block_tier() {
        let actor = PlayerId::new(0);
        let mut board = Board::new();
        place_all(&mut board, PlayerId::new(1), &[(1, 0), (1, 1)]);

        assert_eq!(choose(&mut board, actor, 42), Coord::new(1, 2));
    }

    #[test]
    fn test_block_first_opponent_in_roster_order() {
        let actor = PlayerId::new(2);
        let mut board = Board::new();
        // Both opponents threaten; seat 0 precedes seat 1 in the roster.
        place_all(&mut board, PlayerId::new(0), &[(3, 0), (3, 1)]);
        place_all(&mut board, PlayerId::new(1), &[(0, 0), (1, 0)]);

        assert_eq!(choose(&mut board, actor, 42), Coord::new(3, 2));
    }

    #[test]
    fn test_positional_tier_prefers_center() {
        let actor = PlayerId::new(0);

        for seed in 0..32 {
            let mut board = Board::new();
            let coord = choose(&mut board, actor, seed);
            assert!(
                is_central(coord),
                "seed {seed} chose non-central {coord} on an empty board"
            );
        }
    }

    #[test]
    fn test_positional_tier_falls_back_to_any_empty() {
        let actor = PlayerId::new(2);
        let mut board = Board::new();
        // Central 2x2 full; the diagonal and anti-diagonal pairs it
        // creates are already capped at both ends, so no tier above
        // positional fires.
        place_all(&mut board, PlayerId::new(0), &[(1, 1), (2, 2), (3, 0)]);
        place_all(&mut board, PlayerId::new(1), &[(1, 2), (2, 1), (0, 0)]);
        place_all(&mut board, PlayerId::new(2), &[(0, 3), (3, 3)]);

        for seed in 0..32 {
            let coord = choose(&mut board.clone(), actor, seed);
            assert!(!is_central(coord));
            assert!(board.get(coord).unwrap().is_empty());
        }
    }

    #[test]
    fn test_positional_choice_is_seed_deterministic() {
        let actor = PlayerId::new(1);

        let mut board1 = Board::new();
        let mut board2 = Board::new();

        assert_eq!(choose(&mut board1, actor, 7), choose(&mut board2, actor, 7));
    }

    #[test]
    fn test_no_net_board_mutation() {
        let actor = PlayerId::new(0);
        let mut board = Board::new();
        place_all(&mut board, PlayerId::new(1), &[(1, 0), (1, 1)]);
        let before = board.clone();

        let _ = choose(&mut board, actor, 42);

        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_is_rejected() {
        let roster = Roster::standard();
        let mut rng = GameRng::new(42);
        let mut board = Board::new();
        // Fill all 16 cells with the no-win tie layout.
        let rows = [[2, 1, 0, 0], [0, 1, 2, 1], [1, 2, 2, 0], [0, 1, 0, 2]];
        for (row, cols) in rows.iter().enumerate() {
            for (col, &owner) in cols.iter().enumerate() {
                board
                    .place(Coord::new(row, col), PlayerId::new(owner))
                    .unwrap();
            }
        }

        let err = Heuristic
            .choose(&mut board, &roster, PlayerId::new(0), &mut rng)
            .unwrap_err();
        assert_eq!(err, AiError::NoMovesAvailable);
    }

    #[test]
    fn test_is_central() {
        assert!(is_central(Coord::new(1, 1)));
        assert!(is_central(Coord::new(1, 2)));
        assert!(is_central(Coord::new(2, 1)));
        assert!(is_central(Coord::new(2, 2)));

        assert!(!is_central(Coord::new(0, 0)));
        assert!(!is_central(Coord::new(0, 1)));
        assert!(!is_central(Coord::new(1, 0)));
        assert!(!is_central(Coord::new(3, 3)));
        assert!(!is_central(Coord::new(2, 3)));
    }
}
