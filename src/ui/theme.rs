//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - felt green table
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 110, 58);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 70, 38);

// Disc colors with better contrast
pub const DISC_BLACK: Color32 = Color32::from_rgb(25, 25, 30);
pub const DISC_BLACK_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const DISC_WHITE: Color32 = Color32::from_rgb(250, 250, 252);
pub const DISC_WHITE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

// Functions for colors that can't be const
pub fn hint_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(147, 147, 147, 160)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WIN: Color32 = Color32::from_rgb(50, 220, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const DISC_RADIUS_RATIO: f32 = 0.42;
pub const HINT_RADIUS_RATIO: f32 = 0.16;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
