//! Constraint derivation and candidate filtering for a single feedback.
//!
//! Repeated letters are the subtle part. For every letter of the guess the
//! feedback reveals a match count (its exact plus misplaced marks), which is
//! a lower bound on how often the letter occurs in the secret. An absent mark
//! on a letter that matched elsewhere turns that bound into an exact count.

use log::debug;

use crate::dictionary::Word;
use crate::error::Result;
use crate::feedback::{Feedback, Mark};
use crate::CandidateSet;

/// What one feedback position demands of a candidate word. Counts are the
/// letter's match count across the whole feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The letter is at this position.
    Exact,
    /// The letter occurs at least this many times, but not at this position.
    Misplaced(u8),
    /// With a count of zero the letter does not occur at all. Otherwise it
    /// occurs exactly this many times, and not at this position.
    Absent(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub position: usize,
    pub letter: u8,
    pub requirement: Requirement,
}

impl Constraint {
    pub fn admits(&self, word: &Word) -> bool {
        let here = word.letter(self.position) == self.letter;
        match self.requirement {
            Requirement::Exact => here,
            Requirement::Misplaced(count) => !here && word.count(self.letter) >= count as usize,
            Requirement::Absent(0) => !word.contains(self.letter),
            Requirement::Absent(count) => !here && word.count(self.letter) == count as usize,
        }
    }

    fn evaluation_order(&self) -> u8 {
        match self.requirement {
            Requirement::Exact => 0,
            Requirement::Misplaced(_) => 1,
            Requirement::Absent(_) => 2,
        }
    }
}

/// Constraints for every position of `feedback`, in canonical evaluation
/// order: exact, then misplaced, then absent, by position within each class.
pub fn constraints(feedback: &Feedback) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = feedback
        .iter()
        .enumerate()
        .map(|(position, (letter, mark))| {
            let requirement = match mark {
                Mark::Exact => Requirement::Exact,
                Mark::Misplaced => Requirement::Misplaced(feedback.match_count(letter)),
                Mark::Absent => Requirement::Absent(feedback.match_count(letter)),
            };
            Constraint {
                position,
                letter,
                requirement,
            }
        })
        .collect();
    constraints.sort_by_key(|c| (c.evaluation_order(), c.position));
    constraints
}

/// Whether `word` could be the secret given `feedback`.
pub fn is_consistent(feedback: &Feedback, word: &Word) -> bool {
    constraints(feedback).iter().all(|c| c.admits(word))
}

/// Keep the candidates consistent with `feedback` for `guess`.
///
/// The result is always a subset of `candidates`. Feedback no candidate can
/// satisfy gives an empty set, not an error; feedback whose letters are not
/// the guess's is rejected.
pub fn filter(guess: Word, feedback: &Feedback, candidates: &CandidateSet) -> Result<CandidateSet> {
    feedback.check_guess(guess)?;
    Ok(retain(feedback, candidates))
}

/// [`filter`] for feedback already known to belong to its guess.
pub(crate) fn retain(feedback: &Feedback, candidates: &CandidateSet) -> CandidateSet {
    let constraints = constraints(feedback);
    let kept: CandidateSet = candidates
        .iter()
        .filter(|word| constraints.iter().all(|c| c.admits(word)))
        .copied()
        .collect();
    debug!("{}: {} -> {} candidates", feedback, candidates.len(), kept.len());
    kept
}

/// Size of [`retain`] without building the set.
pub(crate) fn count_consistent(feedback: &Feedback, candidates: &CandidateSet) -> usize {
    let constraints = constraints(feedback);
    candidates
        .iter()
        .filter(|word| constraints.iter().all(|c| c.admits(word)))
        .count()
}
