//! Minimax search with alpha-beta pruning
//!
//! This module implements the decision core of the Othello engine, a
//! fixed-depth minimax over scored frames.
//!
//! # Behavior
//!
//! - Children are generated per origin disc and direction, so two
//!   bracketing lines reaching the same cell yield two candidates
//! - Children are ordered by move score before recursion with a stable
//!   sort, so equal scores keep generation order
//! - A node with no children is scored by its own frame, whatever its
//!   depth
//! - The chosen child is only tracked at the root
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(4);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.x, best_move.y);
//! }
//! ```

use crate::board::{Board, Color, Coord};
use crate::rules::{apply_move, enumerate_moves};

use super::frame::SearchFrame;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Coord>,
    /// Score backed up to the root
    pub score: i32,
    /// Total frames visited
    pub nodes: u64,
}

/// Fixed-depth minimax searcher.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that cuts off at `max_depth` plies.
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self { max_depth, nodes: 0 }
    }

    /// Depth at which frames stop being expanded.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Search `board` for the best move available to `color`.
    ///
    /// With `max_depth` 0 the root itself is the cutoff frame and no
    /// move is produced; the same happens when `color` has no legal
    /// move at all.
    ///
    /// # Arguments
    /// * `board` - The position to search from
    /// * `color` - The side to move at the root
    ///
    /// # Returns
    /// The best root move with its backed-up score and the number of
    /// frames visited
    pub fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;

        let root = SearchFrame::root(*board);
        let (score, best) = self.max_value(&root, color, i32::MIN, i32::MAX);

        SearchResult {
            best_move: best.and_then(|frame| frame.mv),
            score,
            nodes: self.nodes,
        }
    }

    /// Materialize every position reachable from `frame` by one move of
    /// `color`, one frame per bracketing candidate.
    fn expand(&self, frame: &SearchFrame, color: Color) -> Vec<SearchFrame> {
        enumerate_moves(&frame.board, color)
            .into_iter()
            .map(|candidate| {
                let mut board = frame.board;
                apply_move(&mut board, candidate.destination, color);
                SearchFrame::child(frame, board, candidate.destination)
            })
            .collect()
    }

    fn max_value(
        &mut self,
        frame: &SearchFrame,
        color: Color,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<SearchFrame>) {
        self.nodes += 1;

        if frame.depth == self.max_depth {
            return (frame.score, Some(*frame));
        }

        let mut children = self.expand(frame, color);
        if children.is_empty() {
            // Nothing to play from here: the frame itself is the leaf.
            return (frame.score, None);
        }

        children.sort_by(|a, b| b.score.cmp(&a.score));

        let opponent = color.opposite();
        let mut best = None;

        for child in &children {
            let (value, _) = self.min_value(child, opponent, alpha, beta);

            if value > alpha {
                alpha = value;
                if frame.depth == 0 {
                    best = Some(*child);
                }
            }
            if alpha >= beta {
                break;
            }
        }

        (alpha, best)
    }

    fn min_value(
        &mut self,
        frame: &SearchFrame,
        color: Color,
        alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<SearchFrame>) {
        self.nodes += 1;

        if frame.depth == self.max_depth {
            return (frame.score, Some(*frame));
        }

        let mut children = self.expand(frame, color);
        if children.is_empty() {
            return (frame.score, None);
        }

        children.sort_by(|a, b| a.score.cmp(&b.score));

        let opponent = color.opposite();
        let mut best = None;

        for child in &children {
            let (value, _) = self.max_value(child, opponent, alpha, beta);

            if value < beta {
                beta = value;
                if frame.depth == 0 {
                    best = Some(*child);
                }
            }
            if beta <= alpha {
                break;
            }
        }

        (beta, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use proptest::prelude::*;

    /// Unpruned minimax with the same expansion, ordering and leaf
    /// rules as the searcher.
    fn plain_value(frame: &SearchFrame, color: Color, max_depth: u8, maximizing: bool) -> i32 {
        if frame.depth == max_depth {
            return frame.score;
        }

        let mut children: Vec<SearchFrame> = enumerate_moves(&frame.board, color)
            .into_iter()
            .map(|candidate| {
                let mut board = frame.board;
                apply_move(&mut board, candidate.destination, color);
                SearchFrame::child(frame, board, candidate.destination)
            })
            .collect();

        if children.is_empty() {
            return frame.score;
        }

        if maximizing {
            children.sort_by(|a, b| b.score.cmp(&a.score));
        } else {
            children.sort_by(|a, b| a.score.cmp(&b.score));
        }

        let values = children
            .iter()
            .map(|child| plain_value(child, color.opposite(), max_depth, !maximizing));

        if maximizing {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    /// Root decision of the unpruned minimax: first child, in sorted
    /// order, whose value strictly improves on the running best.
    fn plain_search(board: &Board, color: Color, max_depth: u8) -> (i32, Option<Coord>) {
        let root = SearchFrame::root(*board);
        if max_depth == 0 {
            return (root.score, None);
        }

        let mut children: Vec<SearchFrame> = enumerate_moves(board, color)
            .into_iter()
            .map(|candidate| {
                let mut next = *board;
                apply_move(&mut next, candidate.destination, color);
                SearchFrame::child(&root, next, candidate.destination)
            })
            .collect();

        if children.is_empty() {
            return (root.score, None);
        }

        children.sort_by(|a, b| b.score.cmp(&a.score));

        let mut best_value = i32::MIN;
        let mut best_move = None;
        for child in &children {
            let value = plain_value(child, color.opposite(), max_depth, false);
            if value > best_value {
                best_value = value;
                best_move = child.mv;
            }
        }

        (best_value, best_move)
    }

    fn arbitrary_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(any::<prop::sample::Index>(), 0..20).prop_map(|picks| {
            let mut board = Board::new();
            let mut color = Color::Black;

            for pick in picks {
                let moves = crate::rules::destinations(&board, color);
                if moves.is_empty() {
                    color = color.opposite();
                    if crate::rules::destinations(&board, color).is_empty() {
                        break;
                    }
                    continue;
                }
                apply_move(&mut board, moves[pick.index(moves.len())], color);
                color = color.opposite();
            }

            board
        })
    }

    #[test]
    fn test_zero_depth_yields_no_move() {
        let mut searcher = Searcher::new(0);
        let board = Board::new();

        let result = searcher.search(&board, Color::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_no_candidates_yields_no_move() {
        let mut searcher = Searcher::new(4);
        let board = Board::empty();

        let result = searcher.search(&board, Color::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_opening_depth_one_keeps_generation_order() {
        // All four opening moves score 1; the stable ordering hands the
        // first generated candidate to the root.
        let mut searcher = Searcher::new(1);
        let board = Board::new();

        let result = searcher.search(&board, Color::Black);
        assert_eq!(result.best_move, Some(Coord::new(4, 5)));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_opening_depth_two() {
        let mut searcher = Searcher::new(2);
        let board = Board::new();

        let result = searcher.search(&board, Color::Black);
        assert_eq!(result.best_move, Some(Coord::new(4, 5)));
        assert_eq!(result.score, 1);
        // Root, four replies, three leaves under the first and one
        // under each pruned sibling.
        assert_eq!(result.nodes, 11);
    }

    #[test]
    fn test_duplicate_candidates_are_both_searched() {
        // Two bracketing lines reach (2,2), so the root sees two
        // identical children and visits both.
        let mut board = Board::empty();
        board.set(Coord::new(2, 0), Cell::Black);
        board.set(Coord::new(2, 1), Cell::White);
        board.set(Coord::new(2, 3), Cell::White);
        board.set(Coord::new(2, 4), Cell::Black);

        let mut searcher = Searcher::new(1);
        let result = searcher.search(&board, Color::Black);

        assert_eq!(result.best_move, Some(Coord::new(2, 2)));
        assert_eq!(result.score, 2);
        assert_eq!(result.nodes, 3);
    }

    #[test]
    fn test_prefers_longer_flip_at_depth_one() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 3), Cell::Black);
        board.set(Coord::new(1, 3), Cell::White);
        board.set(Coord::new(2, 3), Cell::White);
        board.set(Coord::new(0, 5), Cell::Black);
        board.set(Coord::new(1, 5), Cell::White);

        let mut searcher = Searcher::new(1);
        let result = searcher.search(&board, Color::Black);

        assert_eq!(result.best_move, Some(Coord::new(3, 3)));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_node_count_resets_between_searches() {
        let mut searcher = Searcher::new(2);
        let board = Board::new();

        let first = searcher.search(&board, Color::Black);
        let second = searcher.search(&board, Color::Black);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn test_pruning_matches_plain_minimax_on_opening() {
        for depth in 0..=3 {
            let mut searcher = Searcher::new(depth);
            let board = Board::new();

            let pruned = searcher.search(&board, Color::Black);
            let (value, best_move) = plain_search(&board, Color::Black, depth);

            assert_eq!(pruned.score, value, "depth {depth}");
            assert_eq!(pruned.best_move, best_move, "depth {depth}");
        }
    }

    proptest! {
        /// Pruning never changes the root value or the chosen move.
        #[test]
        fn prop_pruning_is_transparent(
            board in arbitrary_board(),
            depth in 1u8..=2,
        ) {
            for color in [Color::Black, Color::White] {
                let mut searcher = Searcher::new(depth);
                let pruned = searcher.search(&board, color);
                let (value, best_move) = plain_search(&board, color, depth);

                prop_assert_eq!(pruned.score, value);
                prop_assert_eq!(pruned.best_move, best_move);
            }
        }
    }
}
