//! Position: the two player bitboards plus side to move and a live hash
//!
//! There is exactly one `Position` per game. The tree search never copies
//! it; every move made on it is unmade through [`Position::with_move`],
//! which restores the bitboards, the hash and the side to move on every
//! exit path before returning to the caller.

use super::bitboard::Bitboard;
use super::{GameConfig, Player};
use crate::search::ZobristTable;

/// Mutable game position with incremental Zobrist hash maintenance.
#[derive(Debug, Clone)]
pub struct Position {
    config: GameConfig,
    p1: Bitboard,
    p2: Bitboard,
    to_move: Player,
    zobrist: ZobristTable,
    hash: u64,
}

impl Position {
    /// Empty position with freshly generated Zobrist keys.
    pub fn new(config: GameConfig) -> Self {
        Self::with_zobrist(config, ZobristTable::new(config.total_squares()))
    }

    /// Empty position over a caller-supplied key table. Two positions
    /// built over the same table produce comparable hashes.
    pub fn with_zobrist(config: GameConfig, zobrist: ZobristTable) -> Self {
        Self {
            config,
            p1: Bitboard::new(),
            p2: Bitboard::new(),
            to_move: Player::One,
            zobrist,
            hash: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Bitboard of the given player's marks
    #[inline]
    pub fn occupied(&self, player: Player) -> Bitboard {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    /// Currently-empty squares: `!(p1 | p2)` truncated to the board.
    #[inline]
    pub fn moves(&self) -> Bitboard {
        Bitboard::from_raw(!(self.p1.raw() | self.p2.raw()) & self.config.board_mask())
    }

    /// Check if a square is unoccupied by either player
    #[inline]
    pub fn is_square_empty(&self, square: u8) -> bool {
        !self.p1.get(square) && !self.p2.get(square)
    }

    /// Which player occupies a square, if any
    #[inline]
    pub fn owner_at(&self, square: u8) -> Option<Player> {
        if self.p1.get(square) {
            Some(Player::One)
        } else if self.p2.get(square) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Total marks placed so far
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.p1.count() + self.p2.count()
    }

    /// Place the mover's mark at `square`, fold the square key into the
    /// hash, and flip the side to move.
    ///
    /// The square must be empty; callers guarantee this by enumerating
    /// from the [`Self::moves`] mask.
    #[inline]
    pub fn apply_move(&mut self, square: u8) {
        debug_assert!(square < self.config.total_squares());
        debug_assert!(self.is_square_empty(square));

        match self.to_move {
            Player::One => self.p1.toggle(square),
            Player::Two => self.p2.toggle(square),
        }
        self.hash ^= self.zobrist.key(self.to_move, square);
        self.to_move = self.to_move.opponent();
    }

    /// Exact inverse of [`Self::apply_move`] for the same square.
    #[inline]
    pub fn undo_move(&mut self, square: u8) {
        self.to_move = self.to_move.opponent();
        match self.to_move {
            Player::One => self.p1.toggle(square),
            Player::Two => self.p2.toggle(square),
        }
        self.hash ^= self.zobrist.key(self.to_move, square);

        debug_assert!((self.p1.raw() & self.p2.raw()) == 0);
    }

    /// Apply `square`, run `f`, undo `square`. The undo runs on every
    /// exit path of `f`, which is what keeps the single shared position
    /// consistent through the recursive search.
    #[inline]
    pub fn with_move<T>(&mut self, square: u8, f: impl FnOnce(&mut Self) -> T) -> T {
        self.apply_move(square);
        let result = f(self);
        self.undo_move(square);
        result
    }
}
