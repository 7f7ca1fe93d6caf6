//! Othello decision engine
//!
//! An 8x8 Othello engine built around bracketing move resolution and a
//! fixed-depth minimax search:
//! - Standard opening position with black to move first
//! - Moves enumerated by walking opponent runs in eight directions
//! - Per-move heuristic from the flip diff plus a positional weight
//! - Alpha-beta pruned minimax over per-move scores
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, coordinates and the move sentinel
//! - [`rules`]: Move legality and flip application
//! - [`eval`]: Per-move heuristic scoring
//! - [`search`]: Alpha-beta search over move frames
//! - [`engine`]: Engine facade tying the pieces together
//! - [`notation`]: Text formats for boards, colors and moves
//!
//! # Quick Start
//!
//! ```
//! use othello::{Board, Color, Engine};
//!
//! let board = Board::new();
//! let engine = Engine::with_depth(2);
//!
//! // The engine answers for black from the opening position
//! let mv = engine.play(&board, Color::Black);
//! assert_eq!(mv.to_string(), "4,5");
//! ```
//!
//! A position with no legal reply yields the `-1,-1` sentinel instead:
//!
//! ```
//! use othello::{Board, Color, Engine, Move};
//!
//! let engine = Engine::new();
//! let mv = engine.play(&Board::empty(), Color::Black);
//! assert_eq!(mv, Move::NONE);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod notation;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Coord, Move, BOARD_SIZE};
pub use engine::{Engine, MoveReport};
