//! Playing games against a hidden secret with the ranker.
//!
//! A game starts with an empty history and every dictionary word possible.
//! Each turn guesses the configured opening word first, then the top-ranked
//! candidate, and records the feedback. The game ends once a guess is all
//! exact. A guessed word never survives its own non-winning feedback, so the
//! candidate set strictly shrinks and every game terminates.

use std::collections::BTreeMap;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::dictionary::Word;
use crate::error::{ConfigError, Result};
use crate::feedback::Feedback;
use crate::ranker::{rank_candidates, Ranker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Solved,
}

/// One guess of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates still possible when the guess was chosen.
    pub candidates: usize,
}

/// State of a single game against a known secret.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    history: Vec<(Word, Feedback)>,
    turns: Vec<Turn>,
    state: GameState,
}

impl Game {
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            turns: Vec::new(),
            state: GameState::Playing,
        }
    }

    pub fn secret(&self) -> Word {
        self.secret
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Reveal the feedback for `guess` and append it to the history.
    ///
    /// `candidates` is the candidate count the guess was chosen from.
    pub fn guess(&mut self, guess: Word, candidates: usize) -> &Turn {
        let feedback = Feedback::encode(guess, self.secret);
        if feedback.is_solved() {
            self.state = GameState::Solved;
        }
        self.history.push((guess, feedback));
        self.turns.push(Turn {
            guess,
            feedback,
            candidates,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn into_record(self) -> GameRecord {
        GameRecord {
            secret: self.secret,
            turns: self.turns,
        }
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub secret: Word,
    pub turns: Vec<Turn>,
}

impl GameRecord {
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    pub fn guesses(&self) -> Vec<Word> {
        self.turns.iter().map(|turn| turn.guess).collect()
    }

    pub fn is_solved(&self) -> bool {
        self.turns.last().is_some_and(|turn| turn.feedback.is_solved())
    }
}

/// Attempt statistics over a set of games.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub opening: Option<Word>,
    pub games: usize,
    /// Number of games solved in each attempt count.
    pub distribution: BTreeMap<usize, usize>,
    /// The first game needing the most attempts.
    pub worst: Option<GameRecord>,
}

impl BatchReport {
    fn from_records(opening: Option<Word>, records: Vec<GameRecord>) -> Self {
        let mut distribution = BTreeMap::new();
        let mut worst: Option<GameRecord> = None;
        for record in &records {
            *distribution.entry(record.attempts()).or_insert(0) += 1;
            if worst.as_ref().map_or(true, |w| record.attempts() > w.attempts()) {
                worst = Some(record.clone());
            }
        }
        Self {
            opening,
            games: records.len(),
            distribution,
            worst,
        }
    }

    pub fn mean_attempts(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        total as f64 / self.games as f64
    }

    pub fn max_attempts(&self) -> usize {
        self.distribution.keys().next_back().copied().unwrap_or(0)
    }
}

/// Plays games with a [`Ranker`], optionally opening with a fixed word.
#[derive(Debug)]
pub struct Simulator<'a> {
    ranker: Ranker<'a>,
    opening: Option<Word>,
}

impl<'a> Simulator<'a> {
    pub fn new(ranker: Ranker<'a>, opening: Option<Word>) -> Self {
        Self { ranker, opening }
    }

    pub fn ranker(&self) -> &Ranker<'a> {
        &self.ranker
    }

    pub fn opening(&self) -> Option<Word> {
        self.opening
    }

    /// Play one game against `secret` with the configured opening.
    pub fn play(&self, secret: Word) -> Result<GameRecord> {
        self.play_with(secret, self.opening)
    }

    fn play_with(&self, secret: Word, opening: Option<Word>) -> Result<GameRecord> {
        if !self.ranker.dictionary().contains(&secret) {
            return Err(ConfigError::UnknownSecret {
                word: secret.to_string(),
            }
            .into());
        }

        let mut game = Game::new(secret);
        while game.state() == GameState::Playing {
            let remaining = self.ranker.remaining(game.history())?;
            let guess = match opening {
                Some(word) if game.turns().is_empty() => word,
                _ => match rank_candidates(&remaining).first() {
                    Some(best) => best.word,
                    None => {
                        return Err(ConfigError::UnknownSecret {
                            word: secret.to_string(),
                        }
                        .into())
                    }
                },
            };
            let turn = game.guess(guess, remaining.len());
            debug!(
                "{}: guessed {} from {} candidates -> {}",
                secret, turn.guess, turn.candidates, turn.feedback
            );
        }

        let record = game.into_record();
        info!("solved {} in {} guesses", secret, record.attempts());
        Ok(record)
    }

    /// Play `games` games against secrets drawn uniformly, with replacement,
    /// from the dictionary. The same seed always draws the same secrets.
    pub fn run_batch(&self, games: usize, seed: u64) -> Result<BatchReport> {
        self.batch_with(games, seed, self.opening)
    }

    fn batch_with(&self, games: usize, seed: u64, opening: Option<Word>) -> Result<BatchReport> {
        let words = self.ranker.dictionary().words();
        let mut rng = StdRng::seed_from_u64(seed);
        let secrets: Vec<Word> = (0..games)
            .map(|_| words[rng.gen_range(0..words.len())])
            .collect();
        self.play_all(&secrets, opening)
    }

    /// Play every dictionary word as the secret once.
    pub fn run_exhaustive(&self) -> Result<BatchReport> {
        self.play_all(self.ranker.dictionary().words(), self.opening)
    }

    /// Run the same seeded batch once per opening word.
    pub fn compare_openers(&self, openers: &[Word], games: usize, seed: u64) -> Result<Vec<BatchReport>> {
        openers
            .iter()
            .map(|&opening| self.batch_with(games, seed, Some(opening)))
            .collect()
    }

    fn play_all(&self, secrets: &[Word], opening: Option<Word>) -> Result<BatchReport> {
        let records = secrets
            .par_iter()
            .map(|&secret| self.play_with(secret, opening))
            .collect::<Result<Vec<_>>>()?;
        let report = BatchReport::from_records(opening, records);
        info!(
            "{} games opening with {:?}: mean {:.3} attempts",
            report.games,
            opening,
            report.mean_attempts()
        );
        Ok(report)
    }
}
