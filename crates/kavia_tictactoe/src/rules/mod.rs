//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here reads or
//! writes turn order; the engine composes these after every move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line, LINES};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins, checked in [`LINES`] order. Otherwise a full board
/// is a draw, and anything else is still in progress.
#[instrument(skip(board))]
pub fn outcome_of(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
