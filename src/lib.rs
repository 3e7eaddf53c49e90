//! Generalized k-in-a-row engine
//!
//! Plays an m×m, k-in-a-row connection game (tic-tac-toe through
//! 8×8 gomoku-style boards) against a human, choosing moves by negamax
//! tree search under a wall-clock budget.
//!
//! # Architecture
//!
//! - [`board`]: bitboard position representation and game configuration
//! - [`rules`]: win detection anchored at the last move
//! - [`eval`]: static center-control heuristic for depth-exhausted nodes
//! - [`search`]: negamax search, Zobrist hashing, transposition table
//! - [`engine`]: iterative-deepening driver with the stopping policy
//! - [`game`]: console game loop
//!
//! # Quick Start
//!
//! ```
//! use mnk::{Engine, GameConfig, Position};
//!
//! let config = GameConfig::new(3, 3).unwrap();
//! let mut pos = Position::new(config);
//! let mut engine = Engine::new(config);
//!
//! // Human opens in the center; engine answers
//! pos.apply_move(4);
//! if let Some(result) = engine.choose_move(&mut pos, |_| {}) {
//!     pos.apply_move(result.square);
//! }
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{GameConfig, Player, Position};
pub use engine::{Engine, MoveResult};
pub use game::{Game, GameOutcome};
