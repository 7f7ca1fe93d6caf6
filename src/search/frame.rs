//! Search frame records for the minimax tree
//!
//! Every node the search visits is materialized as a frame holding the
//! position it represents, the move that produced it, the score of that
//! move and its depth in the tree. Frames are self-contained: the
//! parent's board is consulted once, when the child's score is
//! computed, and never referenced again.

use crate::board::{Board, Coord};
use crate::eval::score_move;

/// One node of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFrame {
    /// Position this frame represents
    pub board: Board,
    /// Move that produced the position, `None` for the root
    pub mv: Option<Coord>,
    /// Score of the producing move, 0 for the root
    pub score: i32,
    /// Plies from the root
    pub depth: u8,
}

impl SearchFrame {
    /// Frame for the position the search starts from.
    #[must_use]
    pub fn root(board: Board) -> Self {
        Self {
            board,
            mv: None,
            score: 0,
            depth: 0,
        }
    }

    /// Frame for `board`, reached by playing `mv` from `parent`.
    ///
    /// The score covers this transition alone; scores are not
    /// accumulated along the path from the root.
    #[must_use]
    pub fn child(parent: &SearchFrame, board: Board, mv: Coord) -> Self {
        Self {
            board,
            mv: Some(mv),
            score: score_move(&parent.board, &board, mv),
            depth: parent.depth + 1,
        }
    }
}
