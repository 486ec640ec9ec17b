//! Property tests for guess evaluation

use proptest::prelude::*;
use wordle_game::core::{Feedback, LetterMatching, LetterState, Word};

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{5}"
}

fn matching_strategy() -> impl Strategy<Value = LetterMatching> {
    prop_oneof![Just(LetterMatching::Counted), Just(LetterMatching::Loose)]
}

proptest! {
    #[test]
    fn guess_equal_to_answer_always_wins(text in word_strategy(), matching in matching_strategy()) {
        let guess = Word::new(&text).unwrap();
        let answer = Word::new(text.to_ascii_lowercase()).unwrap();

        let feedback = Feedback::evaluate(&guess, &answer, matching);
        prop_assert!(feedback.is_win());
        prop_assert_eq!(feedback, Feedback::WIN);
    }

    #[test]
    fn disjoint_letters_are_all_absent(
        guess in "[a-m]{5}",
        answer in "[n-z]{5}",
        matching in matching_strategy(),
    ) {
        let feedback = Feedback::evaluate(
            &Word::new(&guess).unwrap(),
            &Word::new(&answer).unwrap(),
            matching,
        );
        prop_assert_eq!(feedback.count(LetterState::Absent), 5);
    }

    #[test]
    fn win_only_for_identical_words(guess in word_strategy(), answer in word_strategy()) {
        let guess = Word::new(&guess).unwrap();
        let answer = Word::new(&answer).unwrap();

        let feedback = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
        prop_assert_eq!(feedback.is_win(), guess == answer);
    }

    #[test]
    fn counted_marks_never_exceed_answer_letters(guess in "[a-e]{5}", answer in "[a-e]{5}") {
        let guess = Word::new(&guess).unwrap();
        let answer = Word::new(&answer).unwrap();
        let feedback = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);

        for letter in b'A'..=b'E' {
            let marked = guess
                .chars()
                .iter()
                .zip(feedback.states())
                .filter(|&(&c, &s)| c == letter && s != LetterState::Absent)
                .count();
            let available = answer.chars().iter().filter(|&&c| c == letter).count();
            prop_assert!(marked <= available);
        }
    }

    #[test]
    fn correct_positions_agree_across_modes(guess in "[a-e]{5}", answer in "[a-e]{5}") {
        let guess = Word::new(&guess).unwrap();
        let answer = Word::new(&answer).unwrap();
        let counted = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
        let loose = Feedback::evaluate(&guess, &answer, LetterMatching::Loose);

        for (c, l) in counted.states().iter().zip(loose.states()) {
            prop_assert_eq!(*c == LetterState::Correct, *l == LetterState::Correct);
            // Loose never marks fewer letters than counted
            if *c == LetterState::Present {
                prop_assert_eq!(*l, LetterState::Present);
            }
        }
    }
}

#[test]
fn speed_against_erase_in_both_modes() {
    use LetterState::{Absent as A, Present as P};

    let guess = Word::new("speed").unwrap();
    let answer = Word::new("erase").unwrap();

    let counted = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
    let loose = Feedback::evaluate(&guess, &answer, LetterMatching::Loose);

    assert_eq!(counted.states(), &[P, A, P, P, A]);
    assert_eq!(loose.states(), &[P, A, P, P, A]);
}

#[test]
fn repeated_guess_letter_in_both_modes() {
    use LetterState::{Absent as A, Correct as C, Present as P};

    // ERASE has two Es; EERIE has three
    let guess = Word::new("eerie").unwrap();
    let answer = Word::new("erase").unwrap();

    let counted = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
    let loose = Feedback::evaluate(&guess, &answer, LetterMatching::Loose);

    // Both Es of ERASE are used up by exact matches
    assert_eq!(counted.states(), &[C, A, P, A, C]);
    assert_eq!(loose.states(), &[C, P, P, A, C]);
}
