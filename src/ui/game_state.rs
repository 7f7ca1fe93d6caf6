//! Game state management for the Othello GUI

use crate::board::{Board, Color, Coord};
use crate::engine::{Engine, MoveReport, DEFAULT_DEPTH};
use crate::rules;
use std::cmp::Ordering;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    EngineWin,
    Draw,
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveReport>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub human_color: Color,
    pub current_turn: Color,
    pub outcome: Option<Outcome>,
    pub last_move: Option<Coord>,
    pub legal_moves: Vec<Coord>,
    pub move_history: Vec<(Coord, Color)>,
    pub last_report: Option<MoveReport>,
    pub ai_state: AiState,
    pub message: Option<String>,
    pub engine_depth: u8,

    // Consecutive passes; two in a row end the game
    pass_streak: u8,
}

impl GameState {
    pub fn new(human_color: Color) -> Self {
        let board = Board::new();
        let legal_moves = rules::destinations(&board, Color::Black);
        Self {
            board,
            human_color,
            current_turn: Color::Black,
            outcome: None,
            last_move: None,
            legal_moves,
            move_history: Vec::new(),
            last_report: None,
            ai_state: AiState::Idle,
            message: None,
            engine_depth: DEFAULT_DEPTH,
            pass_streak: 0,
        }
    }

    /// Start over with the same colors and depth setting
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Color::Black;
        self.outcome = None;
        self.last_move = None;
        self.legal_moves = rules::destinations(&self.board, Color::Black);
        self.move_history.clear();
        self.last_report = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.pass_streak = 0;
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.human_color
    }

    /// Check if it's the engine's turn
    pub fn is_engine_turn(&self) -> bool {
        self.current_turn != self.human_color
    }

    /// Check if the engine is searching in the background
    pub fn is_engine_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Disc counts as (black, white)
    pub fn census(&self) -> (u32, u32) {
        self.board.count()
    }

    /// Attempt to play the human's disc at the given cell
    pub fn try_play(&mut self, coord: Coord) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_engine_thinking() {
            return Err("Engine is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.legal_moves.contains(&coord) {
            return Err("That move flips nothing".to_string());
        }

        self.execute_move(coord);
        Ok(())
    }

    /// Commit a move for whichever side is to play
    fn execute_move(&mut self, coord: Coord) {
        let color = self.current_turn;

        rules::apply_move(&mut self.board, coord, color);

        self.move_history.push((coord, color));
        self.last_move = Some(coord);
        self.pass_streak = 0;
        self.message = None;

        self.advance_turn();
    }

    /// Hand the turn to the other side, passing it back when they are blocked
    fn advance_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
        self.legal_moves = rules::destinations(&self.board, self.current_turn);

        if self.legal_moves.is_empty() {
            let side = if self.current_turn == self.human_color {
                "You have"
            } else {
                "Engine has"
            };
            self.message = Some(format!("{side} no move, turn passes"));
            self.pass_current();
        }
    }

    /// Record a pass for the side to play; the second pass in a row ends
    /// the game
    fn pass_current(&mut self) {
        self.pass_streak += 1;
        if self.pass_streak >= 2 {
            self.finish();
            return;
        }

        self.current_turn = self.current_turn.opposite();
        self.legal_moves = rules::destinations(&self.board, self.current_turn);

        if self.legal_moves.is_empty() {
            self.pass_streak += 1;
            self.finish();
        }
    }

    /// Close the game, awarding the win to the side with more discs
    fn finish(&mut self) {
        let (black, white) = self.board.count();
        let leader = match black.cmp(&white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        };

        self.outcome = Some(match leader {
            None => Outcome::Draw,
            Some(color) if color == self.human_color => Outcome::HumanWin,
            Some(_) => Outcome::EngineWin,
        });
    }

    /// Spawn a background search for the engine's reply
    pub fn start_ai_thinking(&mut self) {
        if !self.is_engine_turn() || self.is_engine_thinking() || self.outcome.is_some() {
            return;
        }

        let board = self.board;
        let color = self.current_turn;
        let depth = self.engine_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = Engine::with_depth(depth);
            let report = engine.play_with_stats(&board, color);
            let _ = tx.send(report);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll the background search without blocking
    pub fn check_ai_result(&mut self) {
        let report = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(report) => Some(report),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(report) = report {
            self.ai_state = AiState::Idle;
            self.last_report = Some(report);

            match report.mv.coord() {
                Some(coord) => self.execute_move(coord),
                None => {
                    self.message = Some("Engine passes".to_string());
                    self.pass_current();
                }
            }
        }
    }

    /// Elapsed time of the in-flight search
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
