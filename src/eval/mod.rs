//! Static position evaluation

pub mod heuristic;

pub use heuristic::{center_mask, evaluate};
