//! Move rules for Othello
//!
//! This module implements the rule set for Othello including:
//! - Legal move resolution (directional bracketing scans)
//! - Flip execution when a move is committed
//!
//! A move is legal when, walking from one of the mover's discs along a
//! direction, one or more opponent discs are crossed before reaching an
//! empty cell. Committing the move places a disc on that cell and
//! recolors every bracketed run around it.

pub mod flip;
pub mod moves;

// Re-exports for convenient access
pub use flip::apply_move;
pub use moves::{destinations, enumerate_moves, legal_destination, Candidate};
