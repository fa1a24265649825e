//! Words and the dictionary they come from.
//!
//! The dictionary is built once, validated, and then only ever borrowed.
//! There is no global word list: every component receives it explicitly.

use std::collections::BTreeSet;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{ConfigError, Error, Result};
use crate::{CandidateSet, WORD_LENGTH};

const EMBEDDED_DICTIONARY: &str = include_str!("../dictionary/dictionary.txt");

/// A lowercase ASCII word of [`WORD_LENGTH`] letters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Number of times `letter` occurs in the word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&c| c == letter).count()
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(ConfigError::WordLength {
                word: s.to_string(),
                found: s.chars().count(),
                expected: WORD_LENGTH,
            }
            .into());
        }
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(ConfigError::InvalidWord { word: s.to_string() }.into());
        }
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(bytes);
        Ok(Word(letters))
    }
}

impl TryFrom<&str> for Word {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            f.write_char(c as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// The full word list: ordered for deterministic tie-breaking, with a set
/// view for filtering.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    set: CandidateSet,
}

impl Dictionary {
    /// Build a dictionary from words, in order.
    ///
    /// Each word is trimmed and lowercased. Blank entries are skipped; any
    /// other entry must be [`WORD_LENGTH`] ASCII letters and appear once.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut set = BTreeSet::new();

        for raw in words {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let word: Word = raw.to_lowercase().parse()?;
            if !set.insert(word) {
                return Err(ConfigError::DuplicateWord { word: word.to_string() }.into());
            }
            ordered.push(word);
        }

        if ordered.is_empty() {
            return Err(ConfigError::EmptyDictionary.into());
        }

        debug!("loaded dictionary of {} words", ordered.len());
        Ok(Self { words: ordered, set })
    }

    /// Parse a newline-delimited word list.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines())
    }

    /// The word list compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_DICTIONARY)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Words in load order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_set(&self) -> &CandidateSet {
        &self.set
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
