//! Property tests over random move sequences.

use kavia_tictactoe::invariants::{InvariantSet, StateInvariants};
use kavia_tictactoe::{
    apply_move, check_winner, new_game, outcome_of, restart, try_move, winning_line, GameState,
    Outcome,
};
use proptest::prelude::*;

fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(new_game(), |s, &i| apply_move(s, i))
}

proptest! {
    #[test]
    fn reachable_states_satisfy_invariants(moves in prop::collection::vec(0usize..12, 0..20)) {
        let state = play(&moves);
        prop_assert!(StateInvariants::check_all(&state).is_ok());
        prop_assert_eq!(state.outcome(), outcome_of(state.board()));
    }

    #[test]
    fn outcome_depends_only_on_board(moves in prop::collection::vec(0usize..9, 0..12)) {
        let state = play(&moves);
        let first = outcome_of(state.board());
        let second = outcome_of(state.board());
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.winner(), check_winner(state.board()));
        prop_assert_eq!(winning_line(state.board()).is_some(), matches!(first, Outcome::Win(_)));
    }

    #[test]
    fn each_move_is_accepted_or_a_no_op(
        moves in prop::collection::vec(0usize..9, 0..12),
        index in 0usize..12,
    ) {
        let before = play(&moves);
        match try_move(before, index) {
            Ok(after) => {
                prop_assert!(!before.is_over());
                prop_assert_eq!(after.board().filled_count(), before.board().filled_count() + 1);
                prop_assert_eq!(after.next_player(), before.next_player().opponent());
                for (b, a) in before.board().cells().iter().zip(after.board().cells()) {
                    if !b.is_empty() {
                        prop_assert_eq!(b, a);
                    }
                }
            }
            Err(_) => {
                prop_assert_eq!(apply_move(before, index), before);
            }
        }
    }

    #[test]
    fn terminal_states_are_frozen(
        moves in prop::collection::vec(0usize..9, 0..40),
        index in 0usize..12,
    ) {
        let state = play(&moves);
        if state.is_over() {
            let after = apply_move(state, index);
            prop_assert_eq!(after.board(), state.board());
            prop_assert_eq!(after.next_player(), state.next_player());
            prop_assert_eq!(after.outcome(), state.outcome());
        }
    }
}

#[test]
fn restart_is_empty_and_in_progress() {
    let state = restart();
    assert_eq!(outcome_of(state.board()), Outcome::InProgress);
    assert_eq!(state.board().filled_count(), 0);
}
