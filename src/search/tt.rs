//! Transposition table for caching search results
//!
//! Fixed-capacity, direct-mapped: each hash owns exactly one slot at
//! `hash % size`, no chaining and no eviction. A colliding position
//! silently overwrites the slot unless the slot holds the *same* hash at
//! strictly greater depth, in which case the deeper result is kept.
//! Search quality depends on exactly this probabilistic approximation;
//! do not add collision resolution.
//!
//! Slots are zero-initialized and a hash field of 0 doubles as "never
//! written". A real position hashing to 0 is an accepted false hit/miss
//! risk, not something this table corrects.

/// Default slot count for a game session.
pub const DEFAULT_TT_SIZE: usize = 100_000;

/// Transposition table entry.
///
/// `depth` is the *remaining* search depth when the entry was recorded,
/// not the ply from the root. `eval` is from the perspective of whoever
/// was to move at recording time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: i16,
    pub eval: i32,
}

/// Fixed-capacity position cache with depth-preferred replacement.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    size: usize,
}

impl TranspositionTable {
    /// Create a table with a fixed number of slots. Never resized.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            entries: vec![TTEntry::default(); size],
            size,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Single-slot lookup. Returns the entry only if its stored hash
    /// equals the probed hash; an index collision with a different hash
    /// is a miss by definition of this check.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let entry = self.entries[self.index(hash)];
        if entry.hash == hash {
            Some(entry)
        } else {
            None
        }
    }

    /// Store a result, overwriting whatever occupies the slot unless the
    /// slot holds the same hash at a strictly greater depth (the deeper
    /// result is the more reliable one). An equal-depth store refreshes
    /// the entry.
    pub fn store(&mut self, hash: u64, depth: i16, eval: i32) {
        let idx = self.index(hash);
        let existing = self.entries[idx];
        if existing.hash == hash && existing.depth > depth {
            return;
        }
        self.entries[idx] = TTEntry { hash, depth, eval };
    }

    /// Decrement every live entry's stored depth by 2 (one full round).
    /// Called between each human+engine turn pair: as the game tree
    /// shrinks, old results lose validity and age toward replacement.
    pub fn age_all(&mut self) {
        for entry in &mut self.entries {
            if entry.hash != 0 {
                entry.depth -= 2;
            }
        }
    }

    /// Slot count
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Table usage summary for diagnostics.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.hash != 0).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    pub size: usize,
    pub used: usize,
    pub usage_percent: u8,
}
