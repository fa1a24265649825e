//! Error types.
//!
//! Every failure is a caller contract violation: a bad dictionary or
//! configuration, or feedback that cannot belong to its guess. Nothing is
//! transient, so nothing is retried. A filter that leaves no candidates is
//! not an error and never shows up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
}

/// Problems with the dictionary or the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("word {word:?} has {found} letters, expected {expected}")]
    WordLength {
        word: String,
        found: usize,
        expected: usize,
    },

    #[error("word {word:?} contains characters other than a-z")]
    InvalidWord { word: String },

    #[error("word {word:?} appears more than once in the dictionary")]
    DuplicateWord { word: String },

    #[error("secret {word:?} is not in the dictionary")]
    UnknownSecret { word: String },

    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to configure worker threads")]
    ThreadPool(#[source] rayon::ThreadPoolBuildError),
}

/// Feedback that does not fit the guess it is paired with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback has length {found}, expected {expected}")]
    Length { expected: usize, found: usize },

    #[error("invalid symbol {symbol:?} at position {position}")]
    Symbol { position: usize, symbol: char },

    #[error("feedback letter {feedback:?} at position {position} does not match guess letter {guess:?}")]
    LetterMismatch {
        position: usize,
        guess: char,
        feedback: char,
    },
}
