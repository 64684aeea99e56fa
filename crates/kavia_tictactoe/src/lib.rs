//! Tic-tac-toe game engine.
//!
//! A [`GameState`] is a small `Copy` value. Every transition is a pure
//! function that takes a state and returns the next one, with the outcome
//! recomputed from the board each time.
//!
//! # Example
//!
//! ```
//! use kavia_tictactoe::{apply_move, new_game, Mark, Outcome};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(new_game(), apply_move);
//! assert_eq!(state.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(state.status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::MoveRejected;
pub use engine::{apply_move, new_game, restart, try_move};
pub use position::Position;
pub use rules::{check_winner, is_full, outcome_of, winning_line};
pub use types::{Board, Cell, GameState, Mark, Outcome};
