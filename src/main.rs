//! Othello Engine GUI
//!
//! A graphical interface for playing Othello against the search engine.

use othello::ui::OthelloApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(|cc| Ok(Box::new(OthelloApp::new(cc)))),
    )
}
