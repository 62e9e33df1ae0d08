//! # vispell
//!
//! Context-aware spelling correction for Vietnamese text.
//!
//! The corrector learns adjacent-word (bigram) statistics from a raw text
//! corpus, then rewrites suspect tokens of a document with the
//! in-vocabulary word that best fits both neighbours, as long as it stays
//! within a bounded Damerau-Levenshtein distance of the original. Letter
//! case and surrounding punctuation are restored after correction, and
//! tokens that form a known multi-word phrase are left alone.
//!
//! ## Example
//!
//! ```
//! use vispell::bigrams::{pack, BigramTable};
//! use vispell::index::Index;
//! use vispell::interner::Interner;
//! use vispell::phrases::Wordlist;
//! use vispell::{Corrector, CorrectorConfig};
//!
//! let mut interner = Interner::new();
//! let mut table = BigramTable::new();
//! let em = interner.intern("em");
//! let chao = interner.intern("chào");
//! table.insert(pack(em, chao), 5);
//!
//! let index = Index::new(interner, &table);
//! let corrector = Corrector::new(index, Wordlist::new(), CorrectorConfig::default());
//! assert_eq!(corrector.correct_line("em chao"), "em chào");
//! ```
//!
//! In a real setup the index is learned from a corpus with
//! [`learner::learn`] or loaded from a frequency file with
//! [`freq::read_frequency`], and the wordlist comes from
//! [`phrases::Wordlist::from_reader`].

use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod bigrams;
pub mod chars;
pub mod distance;
mod engine;
pub mod freq;
pub mod index;
pub mod interner;
pub mod invariants;
pub mod learner;
pub mod phrases;

pub use index::Index;
pub use phrases::Wordlist;

/// Dense id assigned to an interned token.
///
/// Two ids pack into one [`bigrams::BigramKey`], so ids are fixed at 32
/// bits; vocabularies stay far below `u32::MAX` in practice.
pub type TokenId = u32;

/// Default maximum Damerau-Levenshtein distance a replacement may have.
pub const DEFAULT_EDIT_DISTANCE_THRESHOLD: usize = 2;

/// Default cap on context-ranked candidates considered per position.
pub const DEFAULT_MAX_CANDIDATES_PER_TOKEN: usize = 1000;

/// Default edit penalty, applied once per unit of edit distance.
pub const DEFAULT_EDIT_PENALTY_FACTOR: f64 = 0.01;

/// Tuning knobs of the correction engine.
#[derive(Debug, Clone)]
pub struct CorrectorConfig {
    /// Maximum edit distance between an inspected token and a replacement.
    pub edit_distance_threshold: usize,
    /// How many of the highest-scoring context candidates to check against
    /// the edit-distance threshold.
    pub max_candidates_per_token: usize,
    /// Per-edit multiplier on the context score; smaller values prefer
    /// closer words more strongly.
    pub edit_penalty_factor: f64,
    /// Merge both neighbour distributions symmetrically instead of scoring
    /// only the left neighbour's candidates when both are known.
    pub symmetric_merge: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            edit_distance_threshold: DEFAULT_EDIT_DISTANCE_THRESHOLD,
            max_candidates_per_token: DEFAULT_MAX_CANDIDATES_PER_TOKEN,
            edit_penalty_factor: DEFAULT_EDIT_PENALTY_FACTOR,
            symmetric_merge: false,
        }
    }
}

/// The spelling corrector: an immutable [`Index`], a [`Wordlist`] and a
/// [`CorrectorConfig`].
///
/// All state is read-only after construction, which is what makes
/// [`Corrector::correct_batch`] safe to run in parallel.
#[derive(Debug)]
pub struct Corrector {
    index: Index,
    wordlist: Wordlist,
    config: CorrectorConfig,
}

impl Corrector {
    pub fn new(index: Index, wordlist: Wordlist, config: CorrectorConfig) -> Self {
        Self {
            index,
            wordlist,
            config,
        }
    }

    /// Load a corrector from a frequency file and a wordlist file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] naming the offending path when either file
    /// cannot be opened or read.
    #[must_use = "from_files returns a Result that must be handled"]
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        frequency_path: P,
        wordlist_path: Q,
        config: CorrectorConfig,
    ) -> Result<Self, Error> {
        let read_error = |path: &Path| {
            let path = path.display().to_string();
            move |source| Error::Read { path, source }
        };

        let frequency_path = frequency_path.as_ref();
        let file = File::open(frequency_path).map_err(read_error(frequency_path))?;
        let (interner, table) =
            freq::read_frequency(BufReader::new(file)).map_err(read_error(frequency_path))?;

        let wordlist_path = wordlist_path.as_ref();
        let file = File::open(wordlist_path).map_err(read_error(wordlist_path))?;
        let wordlist = Wordlist::from_reader(BufReader::new(file)).map_err(read_error(wordlist_path))?;

        Ok(Self::new(Index::new(interner, &table), wordlist, config))
    }

    /// Correct a whole document.
    ///
    /// Lines are processed independently; each input line yields one output
    /// line terminated by `\n`, with corrected tokens substituted in place
    /// and runs of whitespace collapsed to single spaces.
    pub fn correct(&self, text: &str) -> String {
        engine::correct_text(&self.index, &self.wordlist, &self.config, text)
    }

    /// Correct a single line. The result carries no trailing newline.
    pub fn correct_line(&self, line: &str) -> String {
        engine::correct_line(&self.index, &self.wordlist, &self.config, line)
    }

    /// Correct many lines in parallel.
    ///
    /// The index, wordlist and configuration are shared immutably across
    /// worker threads; outputs come back in input order.
    pub fn correct_batch(&self, lines: &[&str]) -> Vec<String> {
        lines
            .par_iter()
            .map(|line| self.correct_line(line))
            .collect()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    Config(String),

    #[error("Failed to read \"{path}\": {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write \"{path}\": {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
