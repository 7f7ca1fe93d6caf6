//! Heuristic evaluation for Othello moves
//!
//! This module provides the move scoring used by the minimax search. A
//! move is scored from the board transition it causes, not from the
//! resulting position alone:
//! - Material swing (cells that changed between parent and child)
//! - Positional bonus for the destination cell
//!
//! Every cell that changed is either the placed disc or a flipped run
//! member, so the diff measures how much the move disturbs the board.

use crate::board::{Board, Coord};

use super::weights::position_weight;

/// Score the transition from `parent` to `child` caused by playing
/// `destination`.
///
/// The score counts the cells that changed, minus one for the placed
/// disc itself, plus the positional weight of the destination. A move
/// that flips a single disc onto a neutral cell therefore scores 1.
///
/// # Arguments
/// * `parent` - The board before the move
/// * `child` - The board after the move was committed
/// * `destination` - The cell the disc was placed on
///
/// # Returns
/// An i32 score; higher favors the player who moved
#[must_use]
pub fn score_move(parent: &Board, child: &Board, destination: Coord) -> i32 {
    child.diff_count(parent) as i32 - 1 + position_weight(destination)
}
