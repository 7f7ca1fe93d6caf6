//! File-based driver for the Othello engine
//!
//! Reads a board position from a text file, asks the engine for the
//! best move for the given color and writes that move to an output
//! file in `x,y` form. The sentinel `-1,-1` is written when the color
//! has no legal move.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use othello::notation::{parse_board, parse_color};
use othello::Engine;

/// Pick a move for one position and write it to a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file: 64 cell tokens (`B`, `W`, `.`), line breaks ignored
    board: PathBuf,

    /// Side to move: `B`, `W`, `black` or `white`
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = othello::engine::DEFAULT_DEPTH)]
    depth: u8,

    /// File the chosen move is written to
    #[arg(long, default_value = "move.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.board)
        .with_context(|| format!("reading board file {}", args.board.display()))?;
    let board = parse_board(&text)?;
    let color = parse_color(&args.color)?;

    let engine = Engine::with_depth(args.depth);
    let report = engine.play_with_stats(&board, color);

    tracing::info!(
        time_ms = report.time_ms,
        nodes = report.nodes,
        "search complete"
    );

    fs::write(&args.output, report.mv.to_string())
        .with_context(|| format!("writing move file {}", args.output.display()))?;

    println!("{}", report.mv);

    Ok(())
}
