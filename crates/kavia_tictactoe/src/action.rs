//! Move rejection reasons.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
///
/// Rejection is never fatal: the state the move was attempted on is left
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// Index outside 0..=8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}
