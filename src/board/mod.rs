//! Board geometry and game configuration

pub mod bitboard;
pub mod position;

// Re-exports
pub use bitboard::Bitboard;
pub use position::Position;

use thiserror::Error;

/// Smallest supported board side
pub const MIN_BOARD_SIZE: u8 = 3;
/// Largest supported board side (8x8 = 64 squares, one u64 word)
pub const MAX_BOARD_SIZE: u8 = 8;
/// Shortest supported winning run
pub const MIN_WIN_CONDITION: u8 = 3;

/// Defaults used when no arguments are given
pub const DEFAULT_BOARD_SIZE: u8 = 5;
pub const DEFAULT_WIN_CONDITION: u8 = 4;

/// Invalid board geometry, reported at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {0}")]
    BoardSize(u8),
    #[error("win condition must be between {MIN_WIN_CONDITION} and size ({size}), got {win_condition}")]
    WinCondition { size: u8, win_condition: u8 },
}

/// Validated board geometry: a square board of side `size` where a run
/// of `win_condition` marks in a line wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    size: u8,
    win_condition: u8,
}

impl GameConfig {
    /// Validate and build a configuration.
    pub fn new(size: u8, win_condition: u8) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize(size));
        }
        if win_condition < MIN_WIN_CONDITION || win_condition > size {
            return Err(ConfigError::WinCondition {
                size,
                win_condition,
            });
        }
        Ok(Self {
            size,
            win_condition,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn win_condition(&self) -> u8 {
        self.win_condition
    }

    #[inline]
    pub fn total_squares(&self) -> u8 {
        self.size * self.size
    }

    /// Mask with the low `total_squares` bits set: the playable region
    /// of a raw u64 word.
    #[inline]
    pub fn board_mask(&self) -> u64 {
        let total = self.total_squares();
        if total == 64 {
            u64::MAX
        } else {
            (1u64 << total) - 1
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_condition: DEFAULT_WIN_CONDITION,
        }
    }
}

/// The two players. Player One always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark used when rendering the board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_valid_range() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            for win in MIN_WIN_CONDITION..=size {
                assert!(GameConfig::new(size, win).is_ok());
            }
        }
    }

    #[test]
    fn test_config_size_out_of_bounds() {
        assert_eq!(GameConfig::new(2, 3), Err(ConfigError::BoardSize(2)));
        assert_eq!(GameConfig::new(9, 3), Err(ConfigError::BoardSize(9)));
    }

    #[test]
    fn test_config_win_condition_out_of_bounds() {
        assert_eq!(
            GameConfig::new(5, 6),
            Err(ConfigError::WinCondition {
                size: 5,
                win_condition: 6
            })
        );
        assert_eq!(
            GameConfig::new(5, 2),
            Err(ConfigError::WinCondition {
                size: 5,
                win_condition: 2
            })
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.size(), 5);
        assert_eq!(config.win_condition(), 4);
        assert_eq!(config.total_squares(), 25);
    }

    #[test]
    fn test_board_mask_width() {
        let config = GameConfig::new(5, 4).unwrap();
        assert_eq!(config.board_mask(), (1u64 << 25) - 1);

        // 8x8 fills the whole word; must not overflow the shift
        let config = GameConfig::new(8, 5).unwrap();
        assert_eq!(config.board_mask(), u64::MAX);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }
}
