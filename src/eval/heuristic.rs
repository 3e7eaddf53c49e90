//! Center-control heuristic for depth-exhausted positions
//!
//! Used only when the search frontier runs out on a non-terminal
//! position. The score is a cheap positional tiebreaker, not an
//! admissible bound: marks inside a precomputed center region count for
//! the side holding them, and the evaluation is the signed difference
//! from the side to move.

use crate::board::{Bitboard, Position};

/// Inner-region mask for a board of the given side length: rows and
/// columns strictly between size/4 and (size/4)*3 in index terms,
/// excluding the outer ring. Integer division throughout, so small
/// boards (size 3) get an empty mask and the evaluation degenerates to 0.
#[must_use]
pub fn center_mask(size: u8) -> Bitboard {
    let size = size as u64;
    let quarter = size / 4;
    let mut mask = Bitboard::new();
    for i in 0..size * size {
        if i > size * quarter && i < size * quarter * 3 && i % size > quarter && i % size < quarter * 3
        {
            mask.set(i as u8);
        }
    }
    mask
}

/// Own center-mark count minus the opponent's, from the perspective of
/// the side to move (negamax convention: the caller negates).
#[inline]
#[must_use]
pub fn evaluate(pos: &Position, center: Bitboard) -> i32 {
    let own = pos.occupied(pos.to_move());
    let opp = pos.occupied(pos.to_move().opponent());

    let own_center = (own.raw() & center.raw()).count_ones() as i32;
    let opp_center = (opp.raw() & center.raw()).count_ones() as i32;

    own_center - opp_center
}
