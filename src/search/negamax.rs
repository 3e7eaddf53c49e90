//! Negamax tree search over a single shared position
//!
//! The searcher walks one mutable [`Position`] depth-first, making and
//! unmaking moves in place — no node ever copies the position. Scores are
//! always from the perspective of the side to move and negated on the way
//! up (negamax convention).
//!
//! The search is deliberately full-width: alpha is raised and threaded
//! into the child window, but no beta cutoff terminates a move loop.
//! The transposition table stores unflagged exact values, which is only
//! sound because every node searches every legal move.
//!
//! # Example
//!
//! ```
//! use mnk::board::{GameConfig, Position};
//! use mnk::search::Searcher;
//!
//! let config = GameConfig::new(3, 3).unwrap();
//! let mut pos = Position::new(config);
//! let mut searcher = Searcher::new(config);
//!
//! let outcome = searcher.search_root(&mut pos, 3, &mut |_| {});
//! assert!(outcome.best_move.is_some());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Bitboard, GameConfig, Position};
use crate::eval::{center_mask, evaluate};
use crate::rules::check_win;

use super::tt::{TTStats, TranspositionTable, DEFAULT_TT_SIZE};

/// Bound strictly below/above every reachable score
pub const SCORE_BOUND: i32 = 9_999;

/// Score recorded when the side that just moved has completed a win:
/// from the perspective of the player now to move the position is lost,
/// so the caller's negation turns it into a win for the mover.
pub const LOSS_SCORE: i32 = -1_000;

/// Odds denominator for the tie-breaking overwrite at the root
const TIE_BREAK_ODDS: u32 = 10;

/// Result of one completed fixed-depth root search.
#[derive(Debug, Clone, Copy)]
pub struct RootOutcome {
    /// Best move found; `None` only when the position had no legal moves
    pub best_move: Option<u8>,
    /// Score of the best move, from the root mover's perspective
    pub score: i32,
}

/// Emitted once per root candidate move, for the UI's overwritable
/// progress line.
#[derive(Debug, Clone, Copy)]
pub struct RootProgress {
    /// Square just evaluated
    pub square: u8,
    /// Depth of the running iteration
    pub depth: i16,
    /// Best score seen so far in this iteration
    pub best_score: i32,
}

/// Negamax searcher owning the transposition table and the tie-break RNG.
///
/// One searcher lives per game session; its table is never cleared, only
/// aged between turns via [`Searcher::age_table`].
pub struct Searcher {
    tt: TranspositionTable,
    center: Bitboard,
    rng: StdRng,
    nodes: u64,
}

impl Searcher {
    /// Searcher with the default table capacity and an OS-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, DEFAULT_TT_SIZE, StdRng::from_os_rng())
    }

    /// Deterministic searcher for reproducible tests.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::build(config, DEFAULT_TT_SIZE, StdRng::seed_from_u64(seed))
    }

    fn build(config: GameConfig, tt_size: usize, rng: StdRng) -> Self {
        Self {
            tt: TranspositionTable::new(tt_size),
            center: center_mask(config.size()),
            rng,
            nodes: 0,
        }
    }

    /// Nodes visited since the last [`Self::reset_nodes`]
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Age the transposition table by one full round (human + engine)
    pub fn age_table(&mut self) {
        self.tt.age_all();
    }

    /// Table usage, for diagnostics
    #[must_use]
    pub fn table_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Root driver for one fixed-depth iteration.
    ///
    /// Enumerates legal moves in increasing square order with the full
    /// window. A strictly better score always takes over as best; an
    /// *equal* score displaces the recorded best move with probability
    /// 1 in 10. Each later tie rolls independently, so the choice among
    /// ties is sequentially biased, not uniform — kept that way on
    /// purpose for move variety.
    pub fn search_root(
        &mut self,
        pos: &mut Position,
        depth: i16,
        progress: &mut impl FnMut(RootProgress),
    ) -> RootOutcome {
        let mut best_move = None;
        let mut best_eval = -SCORE_BOUND;
        let (alpha, beta) = (-SCORE_BOUND, SCORE_BOUND);

        for square in pos.moves().iter_ones() {
            let eval =
                -pos.with_move(square, |p| self.negamax(p, square, depth - 1, -beta, -alpha));

            if eval > best_eval {
                best_eval = eval;
                best_move = Some(square);
            } else if eval == best_eval && self.rng.random_range(0..TIE_BREAK_ODDS) == 0 {
                best_move = Some(square);
            }

            progress(RootProgress {
                square,
                depth,
                best_score: best_eval,
            });
        }

        RootOutcome {
            best_move,
            score: best_eval,
        }
    }

    /// Recursive negamax over the shared position.
    ///
    /// `last_move` anchors the terminal check; `depth` is the remaining
    /// budget before falling back to the static evaluation.
    fn negamax(&mut self, pos: &mut Position, last_move: u8, depth: i16, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        // A stored result from an equal-or-deeper search seeds the best
        // known value. It never short-circuits: the terminal and cutoff
        // cases below are always re-derived.
        let mut best_eval = -SCORE_BOUND;
        if let Some(entry) = self.tt.probe(pos.hash()) {
            if entry.depth >= depth {
                best_eval = entry.eval;
            }
        }

        // The side that just played `last_move` may have won; the player
        // now to move is then lost.
        if check_win(pos, last_move).is_some() {
            self.tt.store(pos.hash(), depth, LOSS_SCORE);
            return LOSS_SCORE;
        }

        if depth <= 0 {
            return evaluate(pos, self.center);
        }

        let moves = pos.moves();
        if moves.is_empty() {
            // Drawn subtree
            return 0;
        }

        for square in moves.iter_ones() {
            let mut eval =
                -pos.with_move(square, |p| self.negamax(p, square, depth - 1, -beta, -alpha));

            // Mate-distance bias: pull forced outcomes one step toward
            // zero per ply, so nearer wins and later losses rank higher
            if eval > 0 {
                eval -= 1;
            } else if eval < 0 {
                eval += 1;
            }

            if eval > best_eval {
                best_eval = eval;
            }
            if best_eval > alpha {
                alpha = best_eval;
            }
        }

        self.tt.store(pos.hash(), depth, best_eval);
        best_eval
    }
}
