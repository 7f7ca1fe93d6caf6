//! Flip application for committed moves

use crate::board::{Board, Cell, Color, Coord, Direction};

/// Commit a move: place `color` on `destination` and recolor every bracketed
/// run around it.
///
/// For each of the eight directions the walk looks for the nearest disc of
/// the moving color; when one is found, every cell from the destination to
/// that disc inclusive becomes `color`. Reaching an empty cell or the board
/// edge first means no flip in that direction.
///
/// The destination cell itself is always set to `color`. Callers only invoke
/// this for destinations the resolver reported, which bracket at least one
/// run, so a committed move is never a no-op.
pub fn apply_move(board: &mut Board, destination: Coord, color: Color) {
    let own = color.cell();

    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let mut x = destination.x as i32 + dx;
        let mut y = destination.y as i32 + dy;

        // Walk outward to the nearest own-color disc, if any
        let mut anchor = None;
        loop {
            match board.try_get(x, y) {
                Some(cell) if cell == own => {
                    anchor = Some((x, y));
                    break;
                }
                Some(Cell::Empty) | None => break,
                Some(_) => {
                    x += dx;
                    y += dy;
                }
            }
        }

        // Recolor from the destination to the anchor inclusive
        if let Some((ax, ay)) = anchor {
            let mut cx = destination.x as i32;
            let mut cy = destination.y as i32;
            loop {
                board.set(Coord::new(cx as u8, cy as u8), own);
                if (cx, cy) == (ax, ay) {
                    break;
                }
                cx += dx;
                cy += dy;
            }
        }
    }

    board.set(destination, own);
}
