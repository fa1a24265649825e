//! Next-guess ranking by expected partition size.
//!
//! Each remaining candidate is tried as the guess against every remaining
//! candidate as the secret. The score is the mean number of candidates that
//! would still be possible afterwards. This is a greedy one-step lookahead,
//! not a minimax or full-depth search, so the top guess is a good guess
//! rather than a guaranteed optimal one.
//!
//! Guesses are drawn from the remaining candidates only, the same set the
//! secret is drawn from.

use std::cmp::Ordering;

use float_ord::FloatOrd;
use log::{debug, info, trace};
use rayon::prelude::*;

use crate::dictionary::{Dictionary, Word};
use crate::error::Result;
use crate::feedback::Feedback;
use crate::filter;
use crate::narrow::FilterCache;
use crate::CandidateSet;

/// A candidate guess and the expected number of candidates left after it.
///
/// Orders by expected size ascending, then by word.
#[derive(Debug, Clone, Copy)]
pub struct RankedGuess {
    pub word: Word,
    pub expected_remaining: f64,
}

impl RankedGuess {
    fn sort_key(&self) -> (FloatOrd<f64>, Word) {
        (FloatOrd(self.expected_remaining), self.word)
    }
}

impl PartialEq for RankedGuess {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for RankedGuess {}

impl PartialOrd for RankedGuess {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedGuess {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Ranks guesses for one dictionary, memoizing history filtering across
/// calls.
#[derive(Debug)]
pub struct Ranker<'a> {
    cache: FilterCache<'a>,
}

impl<'a> Ranker<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            cache: FilterCache::new(dictionary),
        }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.cache.dictionary()
    }

    pub fn cache(&self) -> &FilterCache<'a> {
        &self.cache
    }

    /// Candidates consistent with `history`.
    pub fn remaining(&self, history: &[(Word, Feedback)]) -> Result<CandidateSet> {
        self.cache.narrow(history)
    }

    /// Every remaining candidate with its score, best first.
    pub fn rank(&self, history: &[(Word, Feedback)]) -> Result<Vec<RankedGuess>> {
        let remaining = self.remaining(history)?;
        debug!(
            "{} history entries leave {} candidates",
            history.len(),
            remaining.len()
        );
        Ok(rank_candidates(&remaining))
    }

    pub fn best_guess(&self, history: &[(Word, Feedback)]) -> Result<Option<RankedGuess>> {
        Ok(self.rank(history)?.into_iter().next())
    }
}

/// Rank the candidates left by `history`, best first.
///
/// Builds a one-off [`Ranker`]; keep a `Ranker` around to reuse its cache
/// across calls.
pub fn rank(history: &[(Word, Feedback)], dictionary: &Dictionary) -> Result<Vec<RankedGuess>> {
    Ranker::new(dictionary).rank(history)
}

/// Rank every word of `remaining` as the next guess, best first.
///
/// With no candidates the ranking is empty; a single candidate is returned
/// alone with a score of zero.
pub fn rank_candidates(remaining: &CandidateSet) -> Vec<RankedGuess> {
    if remaining.len() <= 1 {
        return remaining
            .iter()
            .map(|&word| RankedGuess {
                word,
                expected_remaining: 0.0,
            })
            .collect();
    }

    let guesses: Vec<Word> = remaining.iter().copied().collect();
    let mut ranked: Vec<RankedGuess> = guesses
        .par_iter()
        .map(|&word| RankedGuess {
            word,
            expected_remaining: expected_partition_size(word, remaining),
        })
        .collect();
    ranked.sort();

    if let Some(best) = ranked.first() {
        info!(
            "ranked {} candidates, best {} ({:.3} expected remaining)",
            ranked.len(),
            best.word,
            best.expected_remaining
        );
    }
    ranked
}

/// Mean size of the candidate set left after guessing `guess`, over every
/// word of `remaining` taken as the secret.
///
/// Secrets that produce the same feedback leave the same set, so each
/// distinct feedback is filtered once.
pub fn expected_partition_size(guess: Word, remaining: &CandidateSet) -> f64 {
    if remaining.is_empty() {
        return 0.0;
    }

    let mut sizes: [Option<usize>; Feedback::NUM_PATTERNS] = [None; Feedback::NUM_PATTERNS];
    let mut total = 0usize;
    for &secret in remaining {
        let feedback = Feedback::encode(guess, secret);
        let size = *sizes[feedback.pattern_index()]
            .get_or_insert_with(|| filter::count_consistent(&feedback, remaining));
        total += size;
    }

    let distinct = sizes.iter().filter(|s| s.is_some()).count();
    trace!("{}: {} partitions, sum {}", guess, distinct, total);
    total as f64 / remaining.len() as f64
}
