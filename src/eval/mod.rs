//! Board evaluation for Othello
//!
//! This module scores individual moves for the search:
//! - Positional weight table (corners, edges, corner-adjacent traps)
//! - Transition scoring from a parent/child board pair

pub mod heuristic;
pub mod weights;

// Re-exports for convenient access
pub use heuristic::score_move;
pub use weights::{position_weight, POSITION_WEIGHTS};
