//! Game rules: win detection

pub mod win;

pub use win::check_win;
