//! Search module for the Othello AI
//!
//! Contains:
//! - Frame records describing each visited position
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod frame;

pub use alphabeta::{SearchResult, Searcher};
pub use frame::SearchFrame;
