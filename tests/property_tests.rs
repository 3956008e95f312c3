//! Property tests: arbitrary input sequences never break the board
//! invariants.

mod common;

use std::time::Duration;

use proptest::prelude::*;
use wwii_memory::prelude::*;
use wwii_memory::{EventLog, GameState};

#[derive(Clone, Debug)]
enum Input {
    Flip(usize),
    Advance(u64),
    NewGame,
    SetDifficulty(Difficulty),
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        8 => (0usize..18).prop_map(Input::Flip),
        4 => (0u64..2500).prop_map(Input::Advance),
        1 => Just(Input::NewGame),
        1 => difficulty().prop_map(Input::SetDifficulty),
    ]
}

fn assert_board_invariants(state: &GameState) {
    assert!(state.flipped().len() <= 2);
    assert_eq!(state.cards().len(), state.total_pairs() * 2);

    for &slot in state.flipped() {
        let card = state.card(slot).expect("flipped slot on board");
        assert!(!card.matched, "matched card still face up");
    }
    for card in state.cards() {
        assert_eq!(card.matched, state.matched_pairs().contains(&card.pair));
    }
    assert_eq!(state.is_completed(), state.phase() == Phase::Complete);
    if state.is_completed() {
        assert_eq!(state.matched_count(), state.total_pairs());
    }
    if state.phase() == Phase::Idle {
        assert_eq!(state.moves(), 0);
        assert_eq!(state.elapsed_seconds(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_inputs_keep_invariants(
        seed in any::<u64>(),
        start in difficulty(),
        inputs in prop::collection::vec(input(), 0..120),
    ) {
        let log = EventLog::new();
        let mut game = MemoryGame::builder()
            .difficulty(start)
            .seed(seed)
            .observer(log.clone())
            .build()
            .unwrap();

        let mut second_flips = 0u32;
        let mut last_elapsed = 0u32;
        let mut completions_at_deal = 0usize;

        for input in inputs {
            match input {
                Input::Flip(slot) => {
                    if let FlipOutcome::SecondCard { .. } = game.flip(slot) {
                        second_flips += 1;
                    }
                }
                Input::Advance(ms) => game.advance(Duration::from_millis(ms)),
                Input::NewGame => game.new_game(),
                Input::SetDifficulty(difficulty) => {
                    game.set_difficulty(difficulty);
                }
            }

            let state = game.state();
            if state.phase() == Phase::Idle {
                second_flips = 0;
                last_elapsed = 0;
                completions_at_deal = log.completions().len();
            }

            assert_board_invariants(state);
            prop_assert_eq!(state.moves(), second_flips);
            prop_assert!(state.elapsed_seconds() >= last_elapsed);
            last_elapsed = state.elapsed_seconds();

            // At most one notification per dealt board
            let since_deal = log.completions().len() - completions_at_deal;
            prop_assert!(since_deal <= 1);
            prop_assert_eq!(since_deal == 1, state.is_completed());
            prop_assert_eq!(game.completion().is_some(), state.is_completed());
            prop_assert_eq!(game.is_timer_running(), state.phase() == Phase::Active);
        }
    }

    /// Playing every pair in order always completes with the formula score.
    #[test]
    fn prop_perfect_game_scores(seed in any::<u64>(), difficulty in difficulty()) {
        let mut game = MemoryGame::builder()
            .difficulty(difficulty)
            .seed(seed)
            .build()
            .unwrap();

        for (a, b) in common::pair_slots(&game) {
            game.flip(a);
            game.flip(b);
            game.advance(common::MATCH_DELAY);
        }

        let pairs = game.state().total_pairs() as u32;
        let done = game.completion().expect("game completes");
        prop_assert_eq!(done.data.moves, pairs);
        prop_assert_eq!(done.time_spent, pairs);
        prop_assert_eq!(done.score, 1000 - pairs * 10 - pairs);
        prop_assert_eq!(done.data.accuracy, 100);
    }
}
