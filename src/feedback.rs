//! Feedback calculation for Wordle guesses.
//!
//! A [`Feedback`] pairs every letter of a guess with the [`Mark`] it earned
//! against a secret. Its textual form interleaves letters and digits
//! (`0` absent, `1` exact, `2` misplaced), so `crane` against `ample` reads
//! `c0r0a2n0e1`.

use std::fmt;
use std::str::FromStr;

use crate::dictionary::Word;
use crate::error::{Error, FeedbackError, Result};
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Not in the secret, or already accounted for by other positions (gray)
    Absent,
    /// Correct letter in correct position (green)
    Exact,
    /// In the secret but somewhere else (yellow)
    Misplaced,
}

impl Mark {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Mark::Exact => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Absent => '⬛',
        }
    }

    pub fn to_digit(self) -> char {
        match self {
            Mark::Absent => '0',
            Mark::Exact => '1',
            Mark::Misplaced => '2',
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Mark::Absent),
            '1' => Some(Mark::Exact),
            '2' => Some(Mark::Misplaced),
            _ => None,
        }
    }

    /// Whether the position accounts for an occurrence of its letter in the secret.
    pub fn is_match(self) -> bool {
        matches!(self, Mark::Exact | Mark::Misplaced)
    }
}

/// The marks a guess earned, one per position, echoing the guess's letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Word,
    marks: [Mark; WORD_LENGTH],
}

impl Feedback {
    /// Number of distinct mark sequences (3^5).
    pub const NUM_PATTERNS: usize = 243;

    /// Pair a guess with marks given as a slice.
    pub fn new(guess: Word, marks: &[Mark]) -> Result<Self> {
        let marks: [Mark; WORD_LENGTH] = marks.try_into().map_err(|_| FeedbackError::Length {
            expected: WORD_LENGTH,
            found: marks.len(),
        })?;
        Ok(Self { guess, marks })
    }

    /// Calculate the feedback for a guess against a secret.
    ///
    /// Exact matches are settled first and consume their occurrence of the
    /// letter. Remaining positions are then marked misplaced left to right
    /// while unconsumed occurrences of the letter are left in the secret, and
    /// absent once they run out. A letter is never credited more times than
    /// it occurs in the secret.
    pub fn encode(guess: Word, secret: Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let secret_bytes = secret.as_bytes();

        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut secret_remaining = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == secret_bytes[i] {
                marks[i] = Mark::Exact;
            } else {
                secret_remaining[letter_index(secret_bytes[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] != Mark::Exact {
                let idx = letter_index(guess_bytes[i]);
                if secret_remaining[idx] > 0 {
                    marks[i] = Mark::Misplaced;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self { guess, marks }
    }

    /// The guess this feedback was given for.
    pub fn guess(&self) -> Word {
        self.guess
    }

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    /// `(letter, mark)` pairs in guess order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.guess.as_bytes().iter().copied().zip(self.marks.iter().copied())
    }

    /// Exact plus misplaced marks for `letter`: how many times the secret is
    /// known to contain it, as far as this guess reveals.
    pub fn match_count(&self, letter: u8) -> u8 {
        self.iter()
            .filter(|&(c, mark)| c == letter && mark.is_match())
            .count() as u8
    }

    /// Check if this feedback represents a win (all exact)
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Exact)
    }

    /// Base-3 packing of the marks, unique per mark sequence.
    pub fn pattern_index(&self) -> usize {
        self.marks.iter().rev().fold(0, |acc, &mark| {
            let value = match mark {
                Mark::Absent => 0,
                Mark::Misplaced => 1,
                Mark::Exact => 2,
            };
            acc * 3 + value
        })
    }

    /// Confirm this feedback belongs to `guess`, letter for letter.
    pub fn check_guess(&self, guess: Word) -> Result<()> {
        let mismatch = guess
            .as_bytes()
            .iter()
            .zip(self.guess.as_bytes())
            .position(|(g, f)| g != f);
        match mismatch {
            None => Ok(()),
            Some(position) => Err(FeedbackError::LetterMismatch {
                position,
                guess: guess.letter(position) as char,
                feedback: self.guess.letter(position) as char,
            }
            .into()),
        }
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.marks.iter().map(|m| m.to_char()).collect()
    }
}

/// Feedback for `guess` against `secret`.
pub fn encode(guess: Word, secret: Word) -> Feedback {
    Feedback::encode(guess, secret)
}

fn letter_index(c: u8) -> usize {
    (c - b'a') as usize
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, mark) in self.iter() {
            write!(f, "{}{}", letter as char, mark.to_digit())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feedback({})", self)
    }
}

impl FromStr for Feedback {
    type Err = Error;

    /// Parse the textual form, e.g. `c0r0a2n0e1`.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 * WORD_LENGTH {
            return Err(FeedbackError::Length {
                expected: 2 * WORD_LENGTH,
                found: chars.len(),
            }
            .into());
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, pair) in chars.chunks(2).enumerate() {
            let (letter, digit) = (pair[0], pair[1]);
            if !letter.is_ascii_lowercase() {
                return Err(FeedbackError::Symbol { position, symbol: letter }.into());
            }
            letters[position] = letter as u8;
            marks[position] =
                Mark::from_digit(digit).ok_or(FeedbackError::Symbol { position, symbol: digit })?;
        }

        let guess: Word = std::str::from_utf8(&letters)
            .map_err(|_| FeedbackError::Symbol { position: 0, symbol: chars[0] })?
            .parse()?;
        Ok(Self { guess, marks })
    }
}
