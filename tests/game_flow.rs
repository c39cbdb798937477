//! Whole games driven through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{LetterVerdict, Word};
use wordle_game::game::{GameSession, GameStatus, GuessError, MAX_ATTEMPTS};
use wordle_game::stats::{MemoryStore, PlayerId, Recorder};
use wordle_game::wordlists::WordList;

fn type_and_submit(
    session: &mut GameSession<'_>,
    word: &str,
) -> Result<wordle_game::game::Submission, GuessError> {
    for ch in word.chars() {
        session.append_letter(ch);
    }
    session.submit_guess()
}

#[test]
fn embedded_list_plays_a_full_game() {
    let words = WordList::embedded().unwrap();
    let target = Word::new("allow").unwrap();
    let mut session = GameSession::with_target(&words, target).unwrap();

    let first = type_and_submit(&mut session, "lulls").unwrap();
    assert_eq!(
        *first.record.verdicts(),
        [
            LetterVerdict::Present,
            LetterVerdict::Absent,
            LetterVerdict::Correct,
            LetterVerdict::Absent,
            LetterVerdict::Absent,
        ]
    );
    assert_eq!(first.status, GameStatus::InProgress);

    let hints = session.keyboard();
    assert_eq!(hints.get('l'), Some(LetterVerdict::Correct));
    assert_eq!(hints.get('u'), Some(LetterVerdict::Absent));

    let second = type_and_submit(&mut session, "ALLOW").unwrap();
    assert_eq!(second.status, GameStatus::Won);
    assert_eq!(session.attempts_used(), 2);
}

#[test]
fn refused_guesses_leave_the_board_alone() {
    let words = WordList::embedded().unwrap();
    let mut session = GameSession::with_target(&words, Word::new("crane").unwrap()).unwrap();

    assert_eq!(
        type_and_submit(&mut session, "cra"),
        Err(GuessError::IncompleteGuess { len: 3 })
    );
    // Input is kept so the player can finish typing
    assert_eq!(session.current_input(), "cra");
    while session.delete_letter() {}

    assert!(matches!(
        type_and_submit(&mut session, "qzxjk"),
        Err(GuessError::InvalidWord(_))
    ));
    assert!(session.history().is_empty());
    assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
}

#[test]
fn recorded_games_accumulate_statistics() {
    let words = WordList::embedded().unwrap();
    let mut recorder = Recorder::new(MemoryStore::new(), PlayerId::new("integration"));

    // Win in 3
    let mut session = GameSession::with_target(&words, Word::new("slate").unwrap()).unwrap();
    for guess in ["crane", "plate", "slate"] {
        type_and_submit(&mut session, guess).unwrap();
    }
    recorder.record(&mut session).unwrap();

    // Lose
    let mut session = GameSession::with_target(&words, Word::new("ghost").unwrap()).unwrap();
    for _ in 0..MAX_ATTEMPTS {
        type_and_submit(&mut session, "crane").unwrap();
    }
    assert_eq!(session.status(), GameStatus::Lost);
    assert!(matches!(
        type_and_submit(&mut session, "ghost"),
        Err(GuessError::GameOver)
    ));
    recorder.record(&mut session).unwrap();
    // A second record of the same game is a no-op
    assert_eq!(recorder.record(&mut session).unwrap(), None);

    let stats = recorder.current().unwrap();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(stats.guess_distribution.get(3), 1);
    assert_eq!(stats.guess_distribution.total(), 1);
    assert_eq!(stats.win_percentage(), 50);
}

#[test]
fn random_targets_are_always_in_the_list() {
    let words = WordList::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let session = GameSession::new(&words, &mut rng);
        assert!(words.contains_word(session.target()));
    }
}
