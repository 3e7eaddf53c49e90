//! Bitboard implementation for square-set operations

/// Bitboard over square indices, one bit per square.
/// A single u64 covers every supported board (max 8x8 = 64 squares).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap a raw word
    pub const fn from_raw(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw word
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Set the bit at a square index
    #[inline]
    pub fn set(&mut self, square: u8) {
        self.0 |= 1u64 << square;
    }

    /// Clear the bit at a square index
    #[inline]
    pub fn clear(&mut self, square: u8) {
        self.0 &= !(1u64 << square);
    }

    /// Flip the bit at a square index
    #[inline]
    pub fn toggle(&mut self, square: u8) {
        self.0 ^= 1u64 << square;
    }

    /// Check if the bit at a square index is set
    #[inline]
    pub fn get(self, square: u8) -> bool {
        (self.0 >> square) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over set square indices, lowest first.
    /// Low-to-high order is load-bearing: it fixes the engine's move
    /// enumeration order and with it the tie-break behavior.
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.0 }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let square = self.bits.trailing_zeros() as u8;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(square)
    }
}
