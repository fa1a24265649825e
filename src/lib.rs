//! # Wordle Ranker
//!
//! Narrows a Wordle dictionary from observed feedback and ranks the next guess.
//!
//! The pieces build on each other:
//! - [`feedback`] computes the per-letter result of a guess against a secret,
//! - [`filter`](mod@filter) derives constraints from one feedback and filters candidates,
//! - [`narrow`](mod@narrow) applies a whole guess history to the dictionary,
//! - [`ranker`] scores remaining candidates by expected remaining-set size,
//! - [`simulator`] plays games end to end with the ranker.
//!
//! Ranking is a greedy one-step lookahead: each candidate guess is scored by
//! the average size of the candidate set it would leave, taken uniformly over
//! every still-possible secret. It does not search deeper and makes no claim
//! of optimal play.

use std::collections::BTreeSet;

pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod narrow;
pub mod ranker;
pub mod simulator;

pub use config::Config;
pub use dictionary::{Dictionary, Word};
pub use error::{ConfigError, Error, FeedbackError, Result};
pub use feedback::{encode, Feedback, Mark};
pub use filter::{filter, Constraint, Requirement};
pub use narrow::{intersect, narrow, FilterCache};
pub use ranker::{rank, rank_candidates, RankedGuess, Ranker};
pub use simulator::{BatchReport, Game, GameRecord, GameState, Simulator, Turn};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Words still consistent with every feedback observed so far.
///
/// Ordered so iteration, and everything derived from it, is deterministic.
pub type CandidateSet = BTreeSet<Word>;
