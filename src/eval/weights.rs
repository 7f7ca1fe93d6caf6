//! Positional weights for Othello evaluation
//!
//! These constants bias move scores toward stable territory. Corners can
//! never be flipped, so they carry the largest bonus; the cells touching
//! a corner hand the corner to the opponent and are penalized; the
//! remaining edge cells get a small bonus.

use crate::board::{Coord, TOTAL_CELLS};

/// Per-cell score modifier, indexed by `Coord::to_index`.
///
/// Corners score +4, cells orthogonally or diagonally adjacent to a
/// corner score -4, the rest of the edge scores +2 and the interior
/// scores 0. The table is symmetric under transposition.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; TOTAL_CELLS] = [
     4, -4,  2,  2,  2,  2, -4,  4,
    -4, -4,  0,  0,  0,  0, -4, -4,
     2,  0,  0,  0,  0,  0,  0,  2,
     2,  0,  0,  0,  0,  0,  0,  2,
     2,  0,  0,  0,  0,  0,  0,  2,
     2,  0,  0,  0,  0,  0,  0,  2,
    -4, -4,  0,  0,  0,  0, -4, -4,
     4, -4,  2,  2,  2,  2, -4,  4,
];

/// Look up the positional weight for a cell.
#[inline]
#[must_use]
pub fn position_weight(coord: Coord) -> i32 {
    POSITION_WEIGHTS[coord.to_index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_corner_weights() {
        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
            assert_eq!(position_weight(Coord::new(x, y)), 4);
        }
    }

    #[test]
    fn test_corner_adjacent_weights() {
        // Every orthogonal and diagonal neighbor of (0,0).
        for (x, y) in [(1, 0), (0, 1), (1, 1)] {
            assert_eq!(position_weight(Coord::new(x, y)), -4);
        }
        // And of (7,7).
        for (x, y) in [(6, 7), (7, 6), (6, 6)] {
            assert_eq!(position_weight(Coord::new(x, y)), -4);
        }
    }

    #[test]
    fn test_plain_edge_weights() {
        for (x, y) in [(3, 0), (0, 4), (7, 2), (5, 7)] {
            assert_eq!(position_weight(Coord::new(x, y)), 2);
        }
    }

    #[test]
    fn test_interior_weights() {
        for (x, y) in [(2, 2), (3, 4), (4, 4), (5, 2)] {
            assert_eq!(position_weight(Coord::new(x, y)), 0);
        }
    }

    #[test]
    fn test_table_is_symmetric_under_transposition() {
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                assert_eq!(
                    position_weight(Coord::new(x, y)),
                    position_weight(Coord::new(y, x))
                );
            }
        }
    }
}
