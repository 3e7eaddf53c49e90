//! Iterative-deepening driver on top of the negamax searcher
//!
//! The engine re-runs the fixed-depth root search at increasing depth
//! and plays the move of the last *completed* iteration. Deepening stops
//! after an iteration when any of the following holds:
//!
//! 1. elapsed wall-clock time exceeds the budget (one second),
//! 2. the depth ceiling (20) is passed,
//! 3. a nonzero score came back on more than three consecutive
//!    iterations (a stable forced outcome, not worth deepening), or
//! 4. the depth reaches the square count (the game is searched out).
//!
//! The clock is only consulted *between* iterations; a started iteration
//! always runs to completion, so a turn may overshoot the nominal budget
//! by the duration of one extra ply. There is no cancellation mechanism.
//!
//! # Example
//!
//! ```
//! use mnk::board::{GameConfig, Position};
//! use mnk::engine::Engine;
//!
//! let config = GameConfig::new(3, 3).unwrap();
//! let mut pos = Position::new(config);
//! let mut engine = Engine::new(config);
//!
//! let result = engine.choose_move(&mut pos, |_| {}).unwrap();
//! pos.apply_move(result.square);
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::{GameConfig, Position};
use crate::search::{RootOutcome, RootProgress, Searcher};

/// Remaining-depth ceiling for iterative deepening
pub const MAX_SEARCH_DEPTH: i16 = 20;

/// Wall-clock budget per engine turn
pub const TIME_BUDGET: Duration = Duration::from_secs(1);

/// Stop deepening after this many consecutive nonzero scores
const STABLE_SCORE_STREAK: u32 = 3;

/// Depth of the first iteration
const FIRST_DEPTH: i16 = 3;

/// Result of one engine turn.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Square to play
    pub square: u8,
    /// Score from the engine's perspective at the final iteration
    pub score: i32,
    /// Deepest completed iteration
    pub depth: i16,
    /// Nodes searched across all iterations of this turn
    pub nodes: u64,
    /// Total search time
    pub time_ms: u64,
}

/// Game engine: one per session, owning the searcher and its table.
pub struct Engine {
    searcher: Searcher,
    max_depth: i16,
    time_budget: Duration,
}

impl Engine {
    /// Engine with the default depth ceiling and time budget.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
            max_depth: MAX_SEARCH_DEPTH,
            time_budget: TIME_BUDGET,
        }
    }

    /// Deterministic engine for reproducible tests.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            searcher: Searcher::with_seed(config, seed),
            max_depth: MAX_SEARCH_DEPTH,
            time_budget: TIME_BUDGET,
        }
    }

    /// Pick a move for the side to move, reporting per-candidate progress
    /// through `progress`. Returns `None` when no legal move exists.
    pub fn choose_move(
        &mut self,
        pos: &mut Position,
        mut progress: impl FnMut(RootProgress),
    ) -> Option<MoveResult> {
        if pos.moves().is_empty() {
            return None;
        }

        self.searcher.reset_nodes();
        let start = Instant::now();
        let total_squares = pos.config().total_squares() as i16;

        let mut depth = FIRST_DEPTH - 1;
        let mut streak = 0u32;
        let mut outcome: RootOutcome;

        loop {
            depth += 1;
            outcome = self.searcher.search_root(pos, depth, &mut progress);
            streak = if outcome.score != 0 { streak + 1 } else { 0 };

            debug!(
                "depth {depth} done: best {:?} score {} nodes {}",
                outcome.best_move,
                outcome.score,
                self.searcher.nodes()
            );

            if start.elapsed() > self.time_budget
                || depth > self.max_depth
                || streak > STABLE_SCORE_STREAK
                || depth >= total_squares
            {
                break;
            }
        }

        let square = outcome.best_move?;
        let result = MoveResult {
            square,
            score: outcome.score,
            depth,
            nodes: self.searcher.nodes(),
            time_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            "playing {} (score {} depth {} nodes {} in {}ms, table {}% full)",
            result.square,
            result.score,
            result.depth,
            result.nodes,
            result.time_ms,
            self.searcher.table_stats().usage_percent
        );
        Some(result)
    }

    /// Age the transposition table by one full round. Called once per
    /// human+engine turn pair.
    pub fn age_table(&mut self) {
        self.searcher.age_table();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::rules::check_win;
    use crate::search::ZobristTable;

    fn position(config: GameConfig, moves: &[u8]) -> Position {
        let mut pos =
            Position::with_zobrist(config, ZobristTable::from_seed(11, config.total_squares()));
        for &sq in moves {
            pos.apply_move(sq);
        }
        pos
    }

    #[test]
    fn test_engine_takes_immediate_win() {
        let config = GameConfig::new(5, 4).unwrap();
        let mut pos = position(config, &[0, 10, 1, 15, 2, 20]);
        let mut engine = Engine::with_seed(config, 0);

        let result = engine.choose_move(&mut pos, |_| {}).unwrap();
        assert_eq!(result.square, 3);

        pos.apply_move(result.square);
        assert_eq!(check_win(&pos, result.square), Some(Player::One));
    }

    #[test]
    fn test_engine_returns_legal_move() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut pos = position(config, &[4]);
        let mut engine = Engine::with_seed(config, 7);

        let result = engine.choose_move(&mut pos, |_| {}).unwrap();
        assert!(pos.is_square_empty(result.square));
        assert!(result.depth >= FIRST_DEPTH);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_none_on_full_board() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut pos = position(config, &[0, 1, 2, 4, 3, 6, 7, 5, 8]);
        let mut engine = Engine::with_seed(config, 0);

        assert!(engine.choose_move(&mut pos, |_| {}).is_none());
    }

    #[test]
    fn test_deepening_capped_by_board_size() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut pos = position(config, &[]);
        let mut engine = Engine::with_seed(config, 0);

        let result = engine.choose_move(&mut pos, |_| {}).unwrap();
        // 3x3 has 9 squares; deepening can never pass the full game
        assert!(result.depth <= 9);
    }

    #[test]
    fn test_progress_depth_increases() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut pos = position(config, &[4, 0]);
        let mut engine = Engine::with_seed(config, 0);

        let mut depths = Vec::new();
        engine
            .choose_move(&mut pos, |p| {
                if depths.last() != Some(&p.depth) {
                    depths.push(p.depth);
                }
            })
            .unwrap();
        // Monotonically deepening iterations, starting at the first depth
        assert_eq!(depths[0], FIRST_DEPTH);
        assert!(depths.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_position_untouched_after_turn() {
        let config = GameConfig::new(3, 3).unwrap();
        let mut pos = position(config, &[4, 0, 8]);
        let before_hash = pos.hash();
        let mut engine = Engine::with_seed(config, 3);

        engine.choose_move(&mut pos, |_| {}).unwrap();
        assert_eq!(pos.hash(), before_hash);
        assert_eq!(pos.move_count(), 3);
        assert_eq!(pos.to_move(), Player::Two);
    }
}
