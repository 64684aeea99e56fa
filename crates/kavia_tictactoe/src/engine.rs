//! The game engine: pure transitions over [`GameState`].

use crate::action::MoveRejected;
use crate::invariants::{check_transition, Transition};
use crate::position::Position;
use crate::rules::outcome_of;
use crate::types::{Board, Cell, GameState, Mark, Outcome};
use tracing::{debug, info, instrument};

/// Creates a fresh game: empty board, X to move, in progress.
#[instrument]
pub fn new_game() -> GameState {
    GameState::from_parts(Board::new(), Mark::X, Outcome::InProgress)
}

/// Starts over. Same as [`new_game`].
#[instrument]
pub fn restart() -> GameState {
    info!("Restarting game");
    new_game()
}

/// Places the next player's mark at `index`, or explains why not.
///
/// Checks run in a fixed order: a finished game is rejected before the
/// index is looked at, and an out-of-range index before occupancy.
#[instrument(skip(state), fields(next_player = %state.next_player()))]
pub fn try_move(state: GameState, index: usize) -> Result<GameState, MoveRejected> {
    if state.is_over() {
        debug!(outcome = ?state.outcome(), "Move rejected, game over");
        return Err(MoveRejected::GameOver);
    }

    let position = Position::try_from(index)?;

    if !state.board().is_empty(position) {
        debug!(%position, "Move rejected, cell occupied");
        return Err(MoveRejected::CellOccupied(position));
    }

    let player = state.next_player();
    let mut board = *state.board();
    board.set(position, Cell::Occupied(player));
    let outcome = outcome_of(&board);
    let after = GameState::from_parts(board, player.opponent(), outcome);

    debug_assert!(
        check_transition(&Transition {
            before: state,
            after
        })
        .is_ok(),
        "invariant violated applying {} at {}",
        player,
        position
    );

    debug!(%player, %position, ?outcome, board = %board.display(), "Move applied");
    if let Outcome::Win(winner) = outcome {
        info!(%winner, "Game won");
    } else if outcome == Outcome::Draw {
        info!("Game drawn");
    }

    Ok(after)
}

/// Places the next player's mark at `index`.
///
/// Illegal moves are no-ops: the input state comes back unchanged. Use
/// [`try_move`] to learn the reason.
#[instrument(skip(state))]
pub fn apply_move(state: GameState, index: usize) -> GameState {
    try_move(state, index).unwrap_or(state)
}
