//! Main application for the Othello GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Stroke, TopBottomPanel, Vec2,
};

use crate::board::Color;
use super::board_view::BoardView;
use super::game_state::{GameState, Outcome};
use super::theme::*;

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_diagnostics: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            state: GameState::new(Color::Black),
            board_view: BoardView::default(),
            show_diagnostics: true,
        }
    }
}

impl OthelloApp {
    /// Create the app; the human opens with black by default
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Play Black)").clicked() {
                        self.state = GameState::new(Color::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Play White)").clicked() {
                        self.state = GameState::new(Color::White);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_diagnostics, "Diagnostics (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color_name = if self.state.human_color == Color::Black {
                        "Black"
                    } else {
                        "White"
                    };
                    ui.label(format!("You: {color_name}"));
                });
            });
        });
    }

    /// Render the side panel with game info and diagnostics
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                // Game title with logo style
                self.render_title_card(ui);
                ui.add_space(12.0);

                // Turn and result card
                self.render_status_card(ui);
                ui.add_space(10.0);

                // Disc census card
                self.render_score_card(ui);
                ui.add_space(10.0);

                // Engine settings card
                self.render_engine_card(ui);
                ui.add_space(10.0);

                // Actions card
                self.render_actions_card(ui);

                // Diagnostics panel (collapsible)
                if self.show_diagnostics {
                    ui.add_space(10.0);
                    self.render_diagnostics_card(ui);
                }

                // Status message
                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            // Logo discs
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Reversi").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Status text and accent color for the current position
    fn status_line(&self) -> (&'static str, egui::Color32) {
        match self.state.outcome {
            Some(Outcome::HumanWin) => ("You win!", STATUS_WIN),
            Some(Outcome::EngineWin) => ("Engine wins!", STATUS_LOSS),
            Some(Outcome::Draw) => ("Draw game!", TEXT_SECONDARY),
            None if self.state.is_human_turn() => ("Your turn", STATUS_READY),
            None => ("Engine thinking...", STATUS_THINKING),
        }
    }

    /// Render turn and result card
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Color::Black;
            let (color_name, disc_color) = if is_black {
                ("BLACK", DISC_BLACK)
            } else {
                ("WHITE", DISC_WHITE)
            };

            ui.horizontal(|ui| {
                // Large disc indicator for the side to move
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, disc_color);
                ui.painter().circle_stroke(
                    rect.center(),
                    18.0,
                    Stroke::new(1.0, egui::Color32::from_rgb(70, 72, 78)),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, accent) = self.status_line();
                    ui.label(RichText::new(status).size(12.0).color(accent));
                });
            });
        });
    }

    /// Render disc census card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("🎯 SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (black, white) = self.state.census();
            self.render_score_row(ui, Color::Black, black);
            ui.add_space(6.0);
            self.render_score_row(ui, Color::White, white);
        });
    }

    /// Render a single census row
    fn render_score_row(&self, ui: &mut egui::Ui, color: Color, count: u32) {
        let (symbol, symbol_color, name) = match color {
            Color::Black => ("●", egui::Color32::from_rgb(60, 60, 65), "BLACK"),
            Color::White => ("○", egui::Color32::from_rgb(220, 220, 225), "WHITE"),
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(18.0).color(symbol_color));
            ui.add_space(4.0);

            let label = if color == self.state.human_color {
                RichText::new(name).size(13.0).strong().color(TEXT_PRIMARY)
            } else {
                RichText::new(name).size(13.0).color(TEXT_SECONDARY)
            };
            ui.label(label);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(format!("{count}")).size(16.0).strong().color(TEXT_PRIMARY));
            });
        });
    }

    /// Render engine settings card
    fn render_engine_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⚙ ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Depth").size(12.0).color(TEXT_SECONDARY));
                ui.add(egui::Slider::new(&mut self.state.engine_depth, 1..=8));
            });

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Searching... {:.1}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_THINKING),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("⚡ ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("🔄 New Game (N)").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Move #{}", self.state.move_history.len())).size(11.0).color(TEXT_SECONDARY));
            });
        });
    }

    /// Render diagnostics card
    fn render_diagnostics_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("🔧 DIAGNOSTICS").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(report) = &self.state.last_report {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("→ {}", report.mv)).size(12.0).strong().color(STATUS_WIN));
                            ui.label(RichText::new(format!("Score: {}", report.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", report.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", report.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            // Set board area background
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let interactive = self.state.outcome.is_none()
                && self.state.is_human_turn()
                && !self.state.is_engine_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                &self.state.legal_moves,
                self.state.last_move,
                self.state.current_turn,
                interactive,
            );

            // Handle click
            if let Some(coord) = clicked {
                if let Err(msg) = self.state.try_play(coord) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle diagnostics panel
            if i.key_pressed(egui::Key::D) {
                self.show_diagnostics = !self.show_diagnostics;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Collect a finished search
        self.state.check_ai_result();

        // Start the engine's reply if needed
        if self.state.is_engine_turn()
            && !self.state.is_engine_thinking()
            && self.state.outcome.is_none()
        {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the engine is busy
        if self.state.is_engine_thinking() {
            ctx.request_repaint();
        }
    }
}
