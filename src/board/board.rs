//! Flat 64-cell board with census helpers

use super::{Cell, Color, Coord, BOARD_SIZE, TOTAL_CELLS};

/// Game board: 64 cells, row-major, `index = x + y*8`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Standard opening position: the four center cells filled, black and
    /// white on opposite diagonals
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(Coord::new(3, 3), Cell::White);
        board.set(Coord::new(4, 3), Cell::Black);
        board.set(Coord::new(3, 4), Cell::Black);
        board.set(Coord::new(4, 4), Cell::White);
        board
    }

    /// All-empty board
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Get cell at a validated coordinate
    #[inline]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.to_index()]
    }

    /// Set cell at a validated coordinate
    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.to_index()] = cell;
    }

    /// Bounds-checked probe.
    ///
    /// `None` is the out-of-range signal: directional scans consume it as an
    /// ordinary "left the board" terminator, never as a fault.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<Cell> {
        if Coord::is_valid(x, y) {
            Some(self.cells[x as usize + y as usize * BOARD_SIZE])
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Piece census as (black, white)
    pub fn count(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// Coordinates holding a disc of `color`, in scan order (`x` fastest
    /// within increasing `y`).
    ///
    /// Candidate moves are generated cell by cell in this order, so it also
    /// fixes tie-break order in the search.
    pub fn cells_of(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        let cell = color.cell();
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(|(idx, _)| Coord::from_index(idx))
    }

    /// Number of cells where the two boards differ
    pub fn diff_count(&self, other: &Board) -> u32 {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
