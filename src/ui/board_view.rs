//! Board rendering for the Othello GUI

use crate::board::{Board, Cell, Color, Coord, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Hints, hover previews and clicks only happen while `interactive`
    /// is set; the caller decides whether the human may act. Clicks are
    /// reported for every in-board cell so the caller can explain a
    /// rejected one.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        legal_moves: &[Coord],
        last_move: Option<Coord>,
        mover: Color,
        interactive: bool,
    ) -> Option<Coord> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw placed discs
        self.draw_discs(&painter, board);

        // Draw hint dots on the mover's legal cells
        if interactive {
            self.draw_hints(&painter, legal_moves);
        }

        // Draw last move marker
        if let Some(coord) = last_move {
            self.draw_last_move_marker(&painter, coord);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(coord) = self.screen_to_board(pointer_pos) {
                    let is_legal = legal_moves.contains(&coord);
                    self.draw_hover_preview(&painter, coord, mover, is_legal);

                    if response.clicked() {
                        clicked = Some(coord);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed discs
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let coord = Coord::new(x as u8, y as u8);
                let cell = board.get(coord);

                if cell != Cell::Empty {
                    self.draw_disc(painter, coord, cell);
                }
            }
        }
    }

    /// Draw a single disc with visual polish
    fn draw_disc(&self, painter: &Painter, coord: Coord, cell: Cell) {
        let center = self.board_to_screen(coord);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        match cell {
            Cell::Black => {
                // Shadow
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                // Main disc
                painter.circle_filled(center, radius, DISC_BLACK);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    DISC_BLACK_HIGHLIGHT,
                );
            }
            Cell::White => {
                // Shadow
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                // Main disc
                painter.circle_filled(center, radius, DISC_WHITE);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, DISC_WHITE_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    /// Mark the cells where the mover's disc would flip something
    fn draw_hints(&self, painter: &Painter, legal_moves: &[Coord]) {
        let radius = self.cell_size * HINT_RADIUS_RATIO;

        for &coord in legal_moves {
            let center = self.board_to_screen(coord);
            painter.circle_filled(center, radius, super::theme::hint_dot());
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, coord: Coord) {
        let center = self.board_to_screen(coord);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, coord: Coord, mover: Color, is_legal: bool) {
        let center = self.board_to_screen(coord);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if is_legal {
            match mover {
                Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            }
        } else {
            super::theme::hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Coord> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Coord::is_valid(x, y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert a board cell to the screen position of its center
    pub fn board_to_screen(&self, coord: Coord) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (coord.x as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (coord.y as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
