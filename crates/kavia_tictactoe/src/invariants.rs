//! Invariants over game states and transitions.
//!
//! These are the properties every reachable state satisfies. The engine
//! checks them with `debug_assert!` after each accepted move, and the test
//! suites check them directly.

use crate::rules::outcome_of;
use crate::types::{Cell, GameState, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// A state before and after one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State the move was applied to.
    pub before: GameState,
    /// State returned by the engine.
    pub after: GameState,
}

/// Invariant: X moves first and the players alternate.
///
/// X has either as many marks as O (X to move) or exactly one more (O to move).
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        match x.checked_sub(o) {
            Some(0) => state.next_player() == Mark::X,
            Some(1) => state.next_player() == Mark::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: the stored outcome equals the outcome derived from the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == outcome_of(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

/// Invariant: a move fills exactly one empty cell and touches nothing else.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(t: &Transition) -> bool {
        let before = t.before.board().cells();
        let after = t.after.board().cells();
        let mut filled = 0;
        for (b, a) in before.iter().zip(after.iter()) {
            match (b, a) {
                (Cell::Empty, Cell::Empty) => {}
                (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                (Cell::Occupied(x), Cell::Occupied(y)) if x == y => {}
                _ => return false,
            }
        }
        filled == 1
    }

    fn description() -> &'static str {
        "Board only grows, one cell per move"
    }
}

/// Invariant: the player flips across an accepted move.
pub struct TurnFlipsInvariant;

impl Invariant<Transition> for TurnFlipsInvariant {
    fn holds(t: &Transition) -> bool {
        t.after.next_player() == t.before.next_player().opponent()
    }

    fn description() -> &'static str {
        "Next player flips after every accepted move"
    }
}

/// Invariants every reachable state satisfies.
pub type StateInvariants = (AlternatingTurnInvariant, OutcomeConsistentInvariant);

/// Invariants every accepted move satisfies.
pub type TransitionInvariants = (MonotonicBoardInvariant, TurnFlipsInvariant);

/// Checks the transition and the resulting state together.
pub fn check_transition(t: &Transition) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    if let Err(v) = TransitionInvariants::check_all(t) {
        violations.extend(v);
    }
    if let Err(v) = StateInvariants::check_all(&t.after) {
        violations.extend(v);
    }
    collect(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Outcome};
    use crate::{apply_move, new_game};

    #[test]
    fn test_invariants_hold_for_new_game() {
        assert!(StateInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let state = [0, 4, 2].iter().fold(new_game(), |s, &i| apply_move(s, i));
        assert!(StateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_alternation_detects_extra_o() {
        let cells = [
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::O),
            Cell::Empty,
            Cell::Empty,
            Cell::Occupied(Mark::X),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ];
        let state = GameState::from_parts(Board::from_cells(cells), Mark::X, Outcome::InProgress);
        let violations = StateInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    fn test_stale_outcome_detected() {
        let state = GameState::from_parts(Board::new(), Mark::X, Outcome::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_transition_detects_overwrite() {
        let before = apply_move(new_game(), 0);
        let mut cells = *before.board().cells();
        cells[0] = Cell::Occupied(Mark::O);
        let after = GameState::from_parts(Board::from_cells(cells), Mark::X, Outcome::InProgress);
        let t = Transition { before, after };
        assert!(!MonotonicBoardInvariant::holds(&t));
        assert!(check_transition(&t).is_err());
    }

    #[test]
    fn test_transition_holds_for_accepted_move() {
        let before = new_game();
        let after = apply_move(before, 4);
        assert!(check_transition(&Transition { before, after }).is_ok());
    }
}
