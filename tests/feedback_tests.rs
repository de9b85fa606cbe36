use wordle_minimax::Error;
use wordle_minimax::core::LetterOutcome::{Correct, Misplaced, Wrong};
use wordle_minimax::core::{Feedback, LetterOutcome, Word, match_word};

fn outcomes(guess: &str, answer: &str) -> Vec<LetterOutcome> {
    let guess = Word::new(guess).unwrap();
    let answer = Word::new(answer).unwrap();
    match_word(&guess, &answer).unwrap().outcomes().to_vec()
}

#[test]
fn test_all_correct() {
    let fb = match_word(&Word::new("crane").unwrap(), &Word::new("crane").unwrap()).unwrap();
    assert!(fb.is_solved());
    assert_eq!(fb.count(Correct), 5);
}

#[test]
fn test_all_absent() {
    assert_eq!(outcomes("quick", "dream"), [Wrong; 5]);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        outcomes("crane", "charm"),
        [Correct, Misplaced, Correct, Wrong, Wrong]
    );
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(
        outcomes("speed", "creep"),
        [Wrong, Misplaced, Correct, Correct, Wrong]
    );
    assert_eq!(
        outcomes("speed", "erase"),
        [Misplaced, Wrong, Misplaced, Misplaced, Wrong]
    );
}

#[test]
fn test_duplicate_letters_in_both() {
    assert_eq!(
        outcomes("abbey", "bebop"),
        [Wrong, Misplaced, Correct, Misplaced, Wrong]
    );
}

#[test]
fn test_emoji_rendering() {
    let fb = match_word(&Word::new("crane").unwrap(), &Word::new("crate").unwrap()).unwrap();
    assert_eq!(fb.to_emoji(), "🟩🟩🟩⬜🟩");
    assert_eq!(fb.to_string(), "crane 🟩🟩🟩⬜🟩");
}

#[test]
fn test_typed_pattern_matches_calculated() {
    let guess = Word::new("crane").unwrap();
    let calculated = match_word(&guess, &Word::new("charm").unwrap()).unwrap();

    assert_eq!(Feedback::from_pattern(guess.clone(), "GYG--"), Some(calculated));
    assert_eq!(Feedback::from_pattern(guess.clone(), "GYG-"), None);
    assert_eq!(Feedback::from_pattern(guess, "GYG-?"), None);
}

#[test]
fn test_length_mismatch() {
    let result = match_word(&Word::new("cat").unwrap(), &Word::new("crane").unwrap());
    assert_eq!(
        result,
        Err(Error::LengthMismatch {
            expected: 5,
            actual: 3
        })
    );
}

#[test]
fn test_answer_always_admitted() {
    let words = ["abbey", "bebop", "speed", "erase", "crane", "geese", "llama"];
    for guess in words {
        for answer in words {
            let guess = Word::new(guess).unwrap();
            let answer = Word::new(answer).unwrap();
            let fb = match_word(&guess, &answer).unwrap();
            assert!(fb.admits(&answer), "{fb} should admit {answer}");
            assert!(fb.admits_by_rematch(&answer));
        }
    }
}
