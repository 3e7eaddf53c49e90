//! Win detection anchored at the last-played square
//!
//! Only lines through the move just played can have completed a win, so
//! the check walks outward from that square in the four line orientations
//! and never scans the whole board: O(win_condition) per call, independent
//! of board size. This is the sole termination test — a draw is implicitly
//! the case where no empty square remains and no win fired.

use crate::board::{Player, Position};

/// Line orientations in priority order: horizontal, vertical,
/// diagonal (\), anti-diagonal (/). Walking in row/column space keeps a
/// line from wrapping across a row boundary even where the square
/// *indices* are adjacent (e.g. 4 and 5 on a 5-board).
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether the mark at `last_move` completed a winning run.
///
/// The mover is read back off the bitboards. Returns `None` when the
/// square is empty or no orientation through it reaches the win length.
#[must_use]
pub fn check_win(pos: &Position, last_move: u8) -> Option<Player> {
    let player = pos.owner_at(last_move)?;
    let marks = pos.occupied(player);

    let size = pos.config().size() as i32;
    let win = pos.config().win_condition() as i32;
    let row = last_move as i32 / size;
    let col = last_move as i32 % size;

    for (dr, dc) in DIRECTIONS {
        // Anchor square counts itself
        let mut count = 1;

        let mut r = row + dr;
        let mut c = col + dc;
        while r >= 0 && r < size && c >= 0 && c < size && marks.get((r * size + c) as u8) {
            count += 1;
            r += dr;
            c += dc;
        }

        let mut r = row - dr;
        let mut c = col - dc;
        while r >= 0 && r < size && c >= 0 && c < size && marks.get((r * size + c) as u8) {
            count += 1;
            r -= dr;
            c -= dc;
        }

        if count >= win {
            return Some(player);
        }
    }

    None
}
