//! Main engine facade tying the rules, evaluation and search together
//!
//! This module provides the entry points that front ends call: list the
//! legal destinations for a side, or run the minimax search and hand
//! back the move to play. The engine itself is a thin, stateless
//! wrapper around [`Searcher`](crate::search::Searcher); each call
//! searches from scratch.
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color, Engine};
//!
//! let engine = Engine::with_depth(2);
//! let board = Board::new();
//!
//! let report = engine.play_with_stats(&board, Color::Black);
//! println!("Best move: {}", report.mv);
//! println!("Time: {}ms", report.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Color, Coord, Move};
use crate::rules::destinations;
use crate::search::Searcher;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Result of a move search with associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Move to play, or the sentinel when no move exists
    pub mv: Move,
    /// Score backed up to the root
    pub score: i32,
    /// Number of frames visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Othello decision engine.
///
/// Holds only the configured search depth; every query runs on the
/// board it is handed, so one engine can serve any number of games,
/// from any thread.
///
/// # Example
///
/// ```
/// use othello::{Board, Color, Engine};
///
/// let engine = Engine::new();
/// let board = Board::new();
///
/// let mv = engine.play(&board, Color::Black);
/// if !mv.is_none() {
///     println!("Play at {}", mv);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    /// Maximum search depth in plies
    max_depth: u8,
}

impl Engine {
    /// Create an engine with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
        }
    }

    /// Create an engine that searches `max_depth` plies deep.
    ///
    /// Depth 0 never expands the root, so [`play`](Engine::play)
    /// always returns the sentinel.
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self { max_depth }
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Get the current maximum search depth.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// List every destination playable by `color`, in generation order.
    ///
    /// A cell reachable through several bracketing lines appears once
    /// per line.
    #[must_use]
    pub fn list_moves(&self, board: &Board, color: Color) -> Vec<Coord> {
        destinations(board, color)
    }

    /// Get the best move for the given position.
    ///
    /// Returns the sentinel move when `color` has nothing to play or
    /// the depth is 0. Use [`play_with_stats`](Engine::play_with_stats)
    /// if you need search statistics.
    #[must_use]
    pub fn play(&self, board: &Board, color: Color) -> Move {
        self.play_with_stats(board, color).mv
    }

    /// Get the best move with search statistics.
    ///
    /// # Arguments
    ///
    /// * `board` - Current board state
    /// * `color` - Color to move
    ///
    /// # Returns
    ///
    /// `MoveReport` containing the move, its backed-up score, the node
    /// count and the wall time spent.
    #[must_use]
    pub fn play_with_stats(&self, board: &Board, color: Color) -> MoveReport {
        let start = Instant::now();

        let mut searcher = Searcher::new(self.max_depth);
        let result = searcher.search(board, color);

        let mv = result.best_move.map_or(Move::NONE, Move::from_coord);
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            depth = self.max_depth,
            %mv,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );

        MoveReport {
            mv,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
