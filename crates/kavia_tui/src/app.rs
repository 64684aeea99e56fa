//! Application state and intent handling.

use crate::input::{intent_for, move_cursor, Direction, Intent};
use crossterm::event::KeyCode;
use kavia_tictactoe::{restart, try_move, GameState, MoveRejected, Position};
use tracing::{debug, instrument};

/// Everything the view needs between frames.
///
/// The engine's [`GameState`] is the only game data; the rest is view-local.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    last_rejection: Option<MoveRejected>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new() -> Self {
        Self {
            state: kavia_tictactoe::new_game(),
            cursor: Position::Center,
            last_rejection: None,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Why the most recent move was refused, cleared by the next accepted move.
    pub fn last_rejection(&self) -> Option<MoveRejected> {
        self.last_rejection
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(intent) = intent_for(key) else {
            return;
        };
        match intent {
            Intent::Quit => self.should_quit = true,
            Intent::Restart => self.restart(),
            Intent::Cursor(direction) => self.step_cursor(direction),
            Intent::PlayCursor => self.select(self.cursor),
            Intent::Play(position) => {
                self.cursor = position;
                self.select(position);
            }
        }
    }

    /// Plays at `position`. A refusal is kept in [`App::last_rejection`].
    pub fn select(&mut self, position: Position) {
        if self.play(position).is_ok() {
            self.advance_cursor();
        }
    }

    /// Plays the next player's mark at `position`.
    #[instrument(skip(self), fields(next_player = %self.state.next_player()))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveRejected> {
        match try_move(self.state, position.to_index()) {
            Ok(next) => {
                self.state = next;
                self.last_rejection = None;
                Ok(())
            }
            Err(reason) => {
                debug!(%reason, "Move refused");
                self.last_rejection = Some(reason);
                Err(reason)
            }
        }
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = restart();
        self.cursor = Position::Center;
        self.last_rejection = None;
    }

    fn step_cursor(&mut self, direction: Direction) {
        self.cursor = move_cursor(self.cursor, direction);
    }

    /// Moves the cursor to the next open cell after it, wrapping around.
    fn advance_cursor(&mut self) {
        if self.state.is_over() {
            return;
        }
        let open = Position::valid_moves(self.state.board());
        let current = self.cursor.to_index();
        if let Some(next) = open
            .iter()
            .find(|p| p.to_index() > current)
            .or_else(|| open.first())
        {
            self.cursor = *next;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
