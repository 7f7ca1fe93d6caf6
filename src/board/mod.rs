//! Board representation for Othello

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Cell state for a disc of this color
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize + self.y as usize * BOARD_SIZE
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }
}

/// One of the eight scan directions.
///
/// Declaration order is fixed: candidate moves are generated direction by
/// direction in this order, which determines tie-break order in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions in declaration order
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit step as (dx, dy)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// A chosen move: a destination cell, or the "no move" sentinel.
///
/// The sentinel `(-1, -1)` is what `Engine::play` reports when the side to
/// move has no legal move (or the search depth is zero). It serializes as
/// `"-1,-1"` like any other move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub x: i32,
    pub y: i32,
}

impl Move {
    /// The "no move" sentinel
    pub const NONE: Move = Move { x: -1, y: -1 };

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_coord(at: Coord) -> Self {
        Self {
            x: at.x as i32,
            y: at.y as i32,
        }
    }

    /// The destination cell, or `None` for the sentinel
    #[inline]
    pub fn coord(self) -> Option<Coord> {
        if Coord::is_valid(self.x, self.y) {
            Some(Coord::new(self.x as u8, self.y as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl std::fmt::Display for Move {
    /// Wire format: `"<x>,<y>"`, ASCII decimal, no spaces
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
