//! Applying a whole guess history to the dictionary.
//!
//! Two formulations give the same set: [`narrow`] folds the filter over a
//! shrinking candidate set, [`intersect`] filters the full dictionary once
//! per entry and intersects the results. [`FilterCache`] memoizes the
//! per-entry sets of the second form.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::dictionary::{Dictionary, Word};
use crate::error::Result;
use crate::feedback::Feedback;
use crate::filter;
use crate::CandidateSet;

fn check_history(history: &[(Word, Feedback)]) -> Result<()> {
    history
        .iter()
        .try_for_each(|(guess, feedback)| feedback.check_guess(*guess))
}

/// Dictionary words consistent with every entry of `history`, filtering the
/// running candidate set one entry at a time.
///
/// An empty history gives the whole dictionary.
pub fn narrow(history: &[(Word, Feedback)], dictionary: &Dictionary) -> Result<CandidateSet> {
    check_history(history)?;
    let mut candidates = dictionary.word_set().clone();
    for (_, feedback) in history {
        if candidates.is_empty() {
            break;
        }
        candidates = filter::retain(feedback, &candidates);
    }
    Ok(candidates)
}

/// Same result as [`narrow`], filtering the full dictionary independently
/// per entry and intersecting.
pub fn intersect(history: &[(Word, Feedback)], dictionary: &Dictionary) -> Result<CandidateSet> {
    check_history(history)?;
    let sets: Vec<CandidateSet> = history
        .iter()
        .map(|(_, feedback)| filter::retain(feedback, dictionary.word_set()))
        .collect();
    Ok(intersect_all(sets.iter(), dictionary))
}

fn intersect_all<'s, I>(sets: I, dictionary: &Dictionary) -> CandidateSet
where
    I: IntoIterator<Item = &'s CandidateSet>,
{
    let mut sets: Vec<&CandidateSet> = sets.into_iter().collect();
    sets.sort_by_key(|set| set.len());
    match sets.split_first() {
        None => dictionary.word_set().clone(),
        Some((smallest, rest)) => smallest
            .iter()
            .filter(|word| rest.iter().all(|set| set.contains(*word)))
            .copied()
            .collect(),
    }
}

/// Memoized filter results for one dictionary, keyed by feedback.
///
/// A feedback carries its guess, so it fully determines the filtered set.
/// Safe to share between worker threads; two threads filling the same key
/// compute the same value and either insert wins.
#[derive(Debug)]
pub struct FilterCache<'a> {
    dictionary: &'a Dictionary,
    entries: Mutex<HashMap<Feedback, Arc<CandidateSet>>>,
}

impl<'a> FilterCache<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The dictionary filtered by `feedback`, computed at most once per key
    /// barring races.
    pub fn filtered(&self, feedback: &Feedback) -> Arc<CandidateSet> {
        if let Some(hit) = self.lock().get(feedback) {
            debug!("filter cache hit for {}", feedback);
            return Arc::clone(hit);
        }
        let computed = Arc::new(filter::retain(feedback, self.dictionary.word_set()));
        Arc::clone(self.lock().entry(*feedback).or_insert(computed))
    }

    /// [`intersect`] over cached per-entry sets.
    pub fn narrow(&self, history: &[(Word, Feedback)]) -> Result<CandidateSet> {
        check_history(history)?;
        let sets: Vec<Arc<CandidateSet>> = history
            .iter()
            .map(|(_, feedback)| self.filtered(feedback))
            .collect();
        Ok(intersect_all(sets.iter().map(|set| &**set), self.dictionary))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Feedback, Arc<CandidateSet>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
