//! Zobrist hashing for position identification
//!
//! One random 64-bit key per (square, player) pair; a position's hash is
//! the XOR of the keys of every placed mark. XOR is its own inverse, so
//! making and unmaking a move are the same hash update, which is what
//! lets the position maintain its hash incrementally in O(1) per move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Player;

/// Per-square random keys, one table per player, generated once per game.
///
/// The tables must be separate: with a single shared key per square,
/// ownership-swapped positions (One at a / Two at b versus One at b /
/// Two at a) would hash identically and poison the transposition table.
/// No collision avoidance beyond the full 64-bit key space.
#[derive(Debug, Clone)]
pub struct ZobristTable {
    one: Vec<u64>,
    two: Vec<u64>,
}

impl ZobristTable {
    /// Generate keys for a board of `total_squares` cells from OS entropy.
    #[must_use]
    pub fn new(total_squares: u8) -> Self {
        Self::from_rng(StdRng::from_os_rng(), total_squares)
    }

    /// Deterministic table for reproducible tests.
    #[must_use]
    pub fn from_seed(seed: u64, total_squares: u8) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), total_squares)
    }

    fn from_rng(mut rng: StdRng, total_squares: u8) -> Self {
        let one = (0..total_squares).map(|_| rng.random::<u64>()).collect();
        let two = (0..total_squares).map(|_| rng.random::<u64>()).collect();
        Self { one, two }
    }

    /// Key for a player's mark at a square index
    #[inline]
    #[must_use]
    pub fn key(&self, player: Player, square: u8) -> u64 {
        match player {
            Player::One => self.one[square as usize],
            Player::Two => self.two[square as usize],
        }
    }

    /// Number of squares covered
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.one.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.one.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_tables_match() {
        let a = ZobristTable::from_seed(99, 25);
        let b = ZobristTable::from_seed(99, 25);
        for sq in 0..25 {
            assert_eq!(a.key(Player::One, sq), b.key(Player::One, sq));
            assert_eq!(a.key(Player::Two, sq), b.key(Player::Two, sq));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ZobristTable::from_seed(1, 25);
        let b = ZobristTable::from_seed(2, 25);
        assert!((0..25).any(|sq| a.key(Player::One, sq) != b.key(Player::One, sq)));
    }

    #[test]
    fn test_players_get_distinct_keys() {
        // The same square must hash differently depending on who owns it
        let table = ZobristTable::from_seed(42, 64);
        for sq in 0..64 {
            assert_ne!(table.key(Player::One, sq), table.key(Player::Two, sq));
        }
    }

    #[test]
    fn test_keys_distinct_per_square() {
        // 64-bit keys colliding within one table would be a generator bug
        let table = ZobristTable::new(64);
        let mut keys: Vec<u64> = (0..64)
            .flat_map(|sq| [table.key(Player::One, sq), table.key(Player::Two, sq)])
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 128);
    }

    #[test]
    fn test_xor_self_inverse() {
        let table = ZobristTable::from_seed(5, 9);
        let mut hash = 0u64;
        for sq in [0, 4, 8, 2] {
            hash ^= table.key(Player::One, sq);
        }
        for sq in [2, 8, 4, 0] {
            hash ^= table.key(Player::One, sq);
        }
        assert_eq!(hash, 0);
    }

    #[test]
    fn test_len_matches_board() {
        assert_eq!(ZobristTable::from_seed(0, 9).len(), 9);
        assert_eq!(ZobristTable::from_seed(0, 64).len(), 64);
    }
}
