//! Text notation for boards and colors
//!
//! The driver exchanges positions as plain text: one character per
//! cell, `B` for black, `W` for white and `.` for empty, listed in
//! board scan order. Line breaks are ignored, so the same board can be
//! written as a single 64-character line or as eight rows of eight.
//! Colors are named by the single-character cell token or by the full
//! word (`black`, `white`).

use thiserror::Error;

use crate::board::{Board, Cell, Coord, BOARD_SIZE, TOTAL_CELLS};

/// Errors raised while reading board or color text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    /// Board text with the wrong number of cells once line breaks are
    /// stripped
    #[error("board text holds {0} cells, expected {TOTAL_CELLS}")]
    BadLength(usize),

    /// Character that is not a cell token
    #[error("bad cell {found:?} at index {index}")]
    BadCell {
        /// Scan-order index of the offending character
        index: usize,
        /// The character found there
        found: char,
    },

    /// Color name that is neither a token nor a full word
    #[error("unknown color {0:?}")]
    BadColor(String),
}

/// Parse a board from its text form.
///
/// `\n` and `\r` are discarded before reading; every remaining
/// character must be a cell token and exactly 64 must be present.
pub fn parse_board(text: &str) -> Result<Board, NotationError> {
    let tokens: Vec<char> = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    if tokens.len() != TOTAL_CELLS {
        return Err(NotationError::BadLength(tokens.len()));
    }

    let mut board = Board::empty();
    for (index, token) in tokens.iter().enumerate() {
        let cell = match token {
            '.' => Cell::Empty,
            'B' => Cell::Black,
            'W' => Cell::White,
            found => {
                return Err(NotationError::BadCell {
                    index,
                    found: *found,
                })
            }
        };
        board.set(Coord::from_index(index), cell);
    }

    Ok(board)
}

/// Render a board as eight rows of cell tokens.
#[must_use]
pub fn board_to_text(board: &Board) -> String {
    let mut text = String::with_capacity(TOTAL_CELLS + BOARD_SIZE);

    for index in 0..TOTAL_CELLS {
        let token = match board.get(Coord::from_index(index)) {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        };
        text.push(token);
        if index % BOARD_SIZE == BOARD_SIZE - 1 {
            text.push('\n');
        }
    }

    text
}

/// Parse a color name.
///
/// Accepts the cell token (`B`, `W`) or the full word (`black`,
/// `white`).
pub fn parse_color(name: &str) -> Result<crate::board::Color, NotationError> {
    match name {
        "B" | "black" => Ok(crate::board::Color::Black),
        "W" | "white" => Ok(crate::board::Color::White),
        other => Err(NotationError::BadColor(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_parse_opening_board() {
        let rows = "\
........\n\
........\n\
........\n\
...WB...\n\
...BW...\n\
........\n\
........\n\
........\n";

        assert_eq!(parse_board(rows).unwrap(), Board::new());
    }

    #[test]
    fn test_parse_single_line() {
        let mut text = ".".repeat(27);
        text.push_str("WB......BW");
        text.push_str(&".".repeat(27));

        assert_eq!(parse_board(&text).unwrap(), Board::new());
    }

    #[test]
    fn test_parse_accepts_crlf() {
        let unix = board_to_text(&Board::new());
        let dos = unix.replace('\n', "\r\n");

        assert_eq!(parse_board(&dos).unwrap(), Board::new());
    }

    #[test]
    fn test_round_trip() {
        let board = Board::new();
        assert_eq!(parse_board(&board_to_text(&board)).unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_short_text() {
        assert_eq!(
            parse_board("...BW..."),
            Err(NotationError::BadLength(8))
        );
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let mut text = ".".repeat(TOTAL_CELLS);
        text.replace_range(10..11, "x");

        assert_eq!(
            parse_board(&text),
            Err(NotationError::BadCell {
                index: 10,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_board_to_text_rows() {
        let text = board_to_text(&Board::new());
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[3], "...WB...");
        assert_eq!(rows[4], "...BW...");
    }

    #[test]
    fn test_parse_color_tokens() {
        assert_eq!(parse_color("B").unwrap(), Color::Black);
        assert_eq!(parse_color("W").unwrap(), Color::White);
        assert_eq!(parse_color("black").unwrap(), Color::Black);
        assert_eq!(parse_color("white").unwrap(), Color::White);
    }

    #[test]
    fn test_parse_color_rejects_unknown() {
        assert_eq!(
            parse_color("Blue"),
            Err(NotationError::BadColor("Blue".to_string()))
        );
        assert!(parse_color("b").is_err());
        assert!(parse_color("BLACK").is_err());
    }
}
