//! Run configuration.

use std::path::PathBuf;

use log::debug;

use crate::dictionary::{Dictionary, Word};
use crate::error::{ConfigError, Result};

/// Opening word of the simulator unless configured otherwise.
pub const DEFAULT_OPENING: &str = "crane";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First guess of every simulated game. `None` ranks the first move too.
    pub opening_word: Option<Word>,
    /// Number of ranked guesses to report.
    pub top: usize,
    /// Worker threads for ranking and batches. `None` keeps rayon's default.
    pub threads: Option<usize>,
    /// Newline-delimited word list. `None` uses the embedded dictionary.
    pub dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opening_word: DEFAULT_OPENING.parse().ok(),
            top: 10,
            threads: None,
            dictionary_path: None,
        }
    }
}

impl Config {
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        match &self.dictionary_path {
            Some(path) => Dictionary::from_file(path),
            None => Dictionary::embedded(),
        }
    }

    /// Size the global rayon pool. Must run before any parallel work.
    pub fn configure_threads(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(ConfigError::ThreadPool)?;
            debug!("using {} worker threads", threads);
        }
        Ok(())
    }
}
