//! Legal-move resolution via directional bracketing scans

use crate::board::{Board, Cell, Color, Coord, Direction};

/// A candidate move: the origin disc and direction that legalize a
/// destination.
///
/// Distinct (origin, direction) pairs can reach the same destination; every
/// pair stays a separate candidate and is explored independently by the
/// search. The duplicates cannot change which move wins, only how often an
/// identical child is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub origin: Coord,
    pub direction: Direction,
    pub destination: Coord,
}

/// Find the legal destination for `color` stepping from `origin` along
/// `direction`, if any.
///
/// The scan steps outward while it sees opponent discs. An empty cell after
/// at least one opponent disc is the legal destination. An empty cell right
/// away, a disc of the moving color, or the board edge terminate the scan
/// with no move in this direction.
pub fn legal_destination(
    board: &Board,
    origin: Coord,
    direction: Direction,
    color: Color,
) -> Option<Coord> {
    let opponent = color.opposite().cell();
    let (dx, dy) = direction.delta();

    let mut x = origin.x as i32 + dx;
    let mut y = origin.y as i32 + dy;
    let mut covered = false;

    loop {
        match board.try_get(x, y) {
            Some(cell) if cell == opponent => {
                covered = true;
                x += dx;
                y += dy;
            }
            Some(Cell::Empty) if covered => {
                return Some(Coord::new(x as u8, y as u8));
            }
            // Own disc, an uncovered empty cell, or the board edge
            _ => return None,
        }
    }
}

/// Enumerate every candidate move for `color`.
///
/// Origins are visited in board scan order and directions in declaration
/// order; the search relies on this order for tie-breaks. Duplicate
/// destinations from different (origin, direction) pairs are kept.
pub fn enumerate_moves(board: &Board, color: Color) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for origin in board.cells_of(color) {
        for direction in Direction::ALL {
            if let Some(destination) = legal_destination(board, origin, direction, color) {
                candidates.push(Candidate {
                    origin,
                    direction,
                    destination,
                });
            }
        }
    }

    candidates
}

/// Destinations reachable in one ply, in candidate order (duplicates kept).
///
/// Front ends use this to display candidate squares and to detect the
/// "no legal moves" condition.
pub fn destinations(board: &Board, color: Color) -> Vec<Coord> {
    enumerate_moves(board, color)
        .into_iter()
        .map(|candidate| candidate.destination)
        .collect()
}
