//! Application state and key handling.
//!
//! [`App`] is the presentation layer's handle on the game: it owns the
//! [`GameState`], turns key presses into game operations, and keeps the
//! bits of UI state (cursor, focus, move-list selection) the game does not
//! care about.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_timeline::{GameState, GameView, Placement, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row in the displayed move list, not a history step.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(history_reversed: bool) -> Self {
        let mut game = GameState::new();
        game.set_history_reversed(history_reversed);
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Derives the view to render.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(pos) = digit_position(key) {
            self.place(pos);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.select_active();
            }
            KeyCode::Char('o') => self.toggle_order(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let rows = self.game.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    /// Places the next mark at `pos`. Ignored placements change nothing.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        match self.game.place_mark(pos) {
            Placement::Placed { player, step, .. } => {
                debug!(%player, step, "Placed");
                self.select_active();
            }
            Placement::Ignored(reason) => debug!(%reason, "Placement ignored"),
        }
    }

    fn jump_to_selected(&mut self) {
        let step = self.step_at_row(self.selected);
        if let Err(e) = self.game.jump_to(step) {
            warn!(error = %e, "Jump failed");
        }
    }

    fn toggle_order(&mut self) {
        let step = self.step_at_row(self.selected);
        self.game.toggle_history_order();
        self.selected = self.row_of_step(step);
    }

    fn select_active(&mut self) {
        self.selected = self.row_of_step(self.game.current_step());
    }

    fn step_at_row(&self, row: usize) -> usize {
        let last = self.game.history().len() - 1;
        if self.game.history_reversed() {
            last.saturating_sub(row)
        } else {
            row.min(last)
        }
    }

    fn row_of_step(&self, step: usize) -> usize {
        // Row and step map onto each other the same way in both directions.
        self.step_at_row(step)
    }
}
