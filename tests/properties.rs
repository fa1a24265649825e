use proptest::prelude::*;
use proptest::sample::select;

use wordle_ranker::{encode, filter, intersect, narrow, Dictionary, Feedback, FilterCache, Mark, Word};

fn dictionary() -> Dictionary {
    Dictionary::embedded().unwrap()
}

fn any_word() -> impl Strategy<Value = Word> {
    select(dictionary().words().to_vec())
}

fn history_for(secret: Word, guesses: &[Word]) -> Vec<(Word, Feedback)> {
    guesses.iter().map(|&g| (g, encode(g, secret))).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn encode_against_itself_is_solved(w in any_word()) {
        prop_assert!(encode(w, w).is_solved());
    }

    #[test]
    fn matches_never_exceed_secret_occurrences(guess in any_word(), secret in any_word()) {
        let feedback = encode(guess, secret);
        for (position, (letter, mark)) in feedback.iter().enumerate() {
            if mark == Mark::Exact {
                prop_assert_eq!(secret.letter(position), letter);
            }
            prop_assert!(feedback.match_count(letter) as usize <= secret.count(letter));
        }
        prop_assert_eq!(feedback.guess(), guess);
    }

    #[test]
    fn filter_never_grows(guess in any_word(), secret in any_word(), other in any_word()) {
        let dict = dictionary();
        let feedback = encode(guess, secret);
        let once = filter(guess, &feedback, dict.word_set()).unwrap();
        prop_assert!(once.len() <= dict.len());
        prop_assert!(once.is_subset(dict.word_set()));

        let other_feedback = encode(other, secret);
        let twice = filter(other, &other_feedback, &once).unwrap();
        prop_assert!(twice.len() <= once.len());
        prop_assert!(twice.is_subset(&once));
    }

    #[test]
    fn secret_is_always_retained(
        secret in any_word(),
        guesses in prop::collection::vec(any_word(), 0..4),
    ) {
        let history = history_for(secret, &guesses);
        prop_assert!(narrow(&history, &dictionary()).unwrap().contains(&secret));
    }

    #[test]
    fn narrow_is_order_independent(
        secret in any_word(),
        guesses in prop::collection::vec(any_word(), 1..4),
    ) {
        let dict = dictionary();
        let history = history_for(secret, &guesses);
        let mut reversed = history.clone();
        reversed.reverse();
        prop_assert_eq!(narrow(&history, &dict).unwrap(), narrow(&reversed, &dict).unwrap());
    }

    #[test]
    fn narrow_is_idempotent(
        secret in any_word(),
        guesses in prop::collection::vec(any_word(), 1..3),
    ) {
        let dict = dictionary();
        let history = history_for(secret, &guesses);
        let doubled: Vec<_> = history.iter().chain(history.iter()).copied().collect();
        prop_assert_eq!(narrow(&doubled, &dict).unwrap(), narrow(&history, &dict).unwrap());
    }

    #[test]
    fn fold_and_intersection_agree(
        secrets in prop::collection::vec(any_word(), 1..3),
        guesses in prop::collection::vec(any_word(), 1..3),
    ) {
        // Mixing secrets can produce inconsistent histories; both forms must still agree.
        let dict = dictionary();
        let cache = FilterCache::new(&dict);
        let history: Vec<(Word, Feedback)> = guesses
            .iter()
            .zip(secrets.iter().cycle())
            .map(|(&g, &s)| (g, encode(g, s)))
            .collect();

        let folded = narrow(&history, &dict).unwrap();
        prop_assert_eq!(&folded, &intersect(&history, &dict).unwrap());
        prop_assert_eq!(&folded, &cache.narrow(&history).unwrap());
    }
}
