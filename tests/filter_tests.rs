use std::collections::BTreeSet;

use wordle_ranker::{
    encode, filter, intersect, narrow, CandidateSet, Dictionary, Error, Feedback, FeedbackError,
    FilterCache, Word,
};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn feedback(s: &str) -> Feedback {
    s.parse().unwrap()
}

fn entry(s: &str) -> (Word, Feedback) {
    let fb = feedback(s);
    (fb.guess(), fb)
}

fn words(set: &CandidateSet) -> BTreeSet<String> {
    set.iter().map(Word::to_string).collect()
}

fn expected(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn filter_dictionary(fb: &str) -> CandidateSet {
    let dictionary = Dictionary::embedded().unwrap();
    let fb = feedback(fb);
    filter(fb.guess(), &fb, dictionary.word_set()).unwrap()
}

#[test]
fn test_filter_single_survivor() {
    assert_eq!(words(&filter_dictionary("a1l2g2a0e1")), expected(&["agile"]));
}

#[test]
fn test_filter_repeated_misplaced_letters() {
    assert_eq!(
        words(&filter_dictionary("c1r2a2n0e0")),
        expected(&["carol", "cargo", "cobra", "carat", "cigar", "circa", "coral", "carry"])
    );
}

#[test]
fn test_filter_letter_misplaced_twice() {
    assert_eq!(
        words(&filter_dictionary("e2n0t2e2r0")),
        expected(&["theme", "tease", "teeth", "these"])
    );
}

#[test]
fn test_filter_inconsistent_feedback_is_empty() {
    assert!(filter_dictionary("t0w1e1e2t1").is_empty());
}

#[test]
fn test_filter_is_subset() {
    let dictionary = Dictionary::embedded().unwrap();
    let fb = encode(word("crane"), word("ample"));
    let filtered = filter(word("crane"), &fb, dictionary.word_set()).unwrap();
    assert!(filtered.len() <= dictionary.len());
    assert!(filtered.is_subset(dictionary.word_set()));
    assert!(filtered.contains(&word("ample")));
}

#[test]
fn test_filter_rejects_mismatched_guess() {
    let dictionary = Dictionary::embedded().unwrap();
    let err = filter(word("crate"), &feedback("c0r0a2n0e1"), dictionary.word_set()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFeedback(FeedbackError::LetterMismatch { position: 3, .. })
    ));
}

#[test]
fn test_narrow_empty_history_is_dictionary() {
    let dictionary = Dictionary::embedded().unwrap();
    assert_eq!(&narrow(&[], &dictionary).unwrap(), dictionary.word_set());
    assert_eq!(&intersect(&[], &dictionary).unwrap(), dictionary.word_set());
}

#[test]
fn test_narrow_two_guesses() {
    let dictionary = Dictionary::embedded().unwrap();
    let after_crane = narrow(&[entry("c0r0a2n0e1")], &dictionary).unwrap();
    assert_eq!(after_crane.len(), 23);
    assert!(after_crane.contains(&word("table")));

    let history = [entry("c0r0a2n0e1"), entry("a1m1b0l1e1")];
    assert_eq!(words(&narrow(&history, &dictionary).unwrap()), expected(&["ample"]));
}

#[test]
fn test_narrow_formulations_agree() {
    let dictionary = Dictionary::embedded().unwrap();
    let cache = FilterCache::new(&dictionary);
    let secret = word("coral");
    let history: Vec<(Word, Feedback)> = ["crane", "tweet", "amble", "sharp"]
        .iter()
        .map(|g| (word(g), encode(word(g), secret)))
        .collect();

    let folded = narrow(&history, &dictionary).unwrap();
    assert_eq!(folded, intersect(&history, &dictionary).unwrap());
    assert_eq!(folded, cache.narrow(&history).unwrap());
    assert!(folded.contains(&secret));
}

#[test]
fn test_narrow_is_order_independent_and_idempotent() {
    let dictionary = Dictionary::embedded().unwrap();
    let history = [entry("c0r0a2n0e1"), entry("h0a2l2v0e1")];
    let reversed = [history[1], history[0]];
    let doubled = [history[0], history[1], history[0], history[1]];

    let base = narrow(&history, &dictionary).unwrap();
    assert_eq!(base, narrow(&reversed, &dictionary).unwrap());
    assert_eq!(base, narrow(&doubled, &dictionary).unwrap());
}

#[test]
fn test_narrow_rejects_bad_entry() {
    let dictionary = Dictionary::embedded().unwrap();
    let history = [entry("c0r0a2n0e1"), (word("slate"), feedback("c0r0a2n0e1"))];
    assert!(matches!(
        narrow(&history, &dictionary),
        Err(Error::InvalidFeedback(FeedbackError::LetterMismatch { position: 0, .. }))
    ));
    let cache = FilterCache::new(&dictionary);
    assert!(cache.narrow(&history).is_err());
}

#[test]
fn test_filter_cache_reuses_entries() {
    let dictionary = Dictionary::embedded().unwrap();
    let cache = FilterCache::new(&dictionary);
    assert!(cache.is_empty());

    let history = [entry("c0r0a2n0e1")];
    let first = cache.narrow(&history).unwrap();
    let second = cache.narrow(&history).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    cache.narrow(&[entry("c0r0a2n0e1"), entry("a1m1b0l1e1")]).unwrap();
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
}
