//! Search algorithms: negamax tree search, transposition table, hashing

pub mod negamax;
pub mod tt;
pub mod zobrist;

pub use negamax::{RootOutcome, RootProgress, Searcher, LOSS_SCORE, SCORE_BOUND};
pub use tt::{TTEntry, TTStats, TranspositionTable, DEFAULT_TT_SIZE};
pub use zobrist::ZobristTable;
