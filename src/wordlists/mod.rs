//! Word lists for the scramble game
//!
//! Provides the in-memory [`WordStore`] and the sources it can be built from:
//! a CSV file on disk or the word list embedded at build time.

mod csv;
mod embedded;
pub mod loader;

pub use embedded::{BUILTIN_WORDS, BUILTIN_WORDS_COUNT};
pub use loader::LoadError;

use crate::core::Word;
use rand::Rng;
use std::path::PathBuf;

/// Immutable, ordered collection of candidate words
///
/// Built once and then shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    /// A store with no words; every puzzle request reports "not ready"
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Parse a store from CSV text
    ///
    /// # Errors
    ///
    /// Returns an error if the header row is missing or lacks a `Word` column.
    pub fn from_csv_str(content: &str) -> Result<Self, LoadError> {
        loader::words_from_csv(content).map(Self::from_words)
    }

    /// Load a store from a CSV file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has no `Word` column.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, LoadError> {
        loader::load_from_file(path).map(Self::from_words)
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(loader::words_from_slice(BUILTIN_WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a word at a uniformly random index
    ///
    /// Returns `None` if the store is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.words.len());
        self.words.get(index)
    }
}

/// Where the server takes its words from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list embedded at build time
    Builtin,
    /// A CSV file with a `Word` column
    File(PathBuf),
}

impl WordSource {
    /// Parse the `--wordlist` argument
    ///
    /// - "builtin": use the embedded list
    /// - "<path>": load from a CSV file
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "builtin" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Build the store for this source
    ///
    /// # Errors
    ///
    /// Returns an error if a file source cannot be read or parsed.
    pub fn load(&self) -> Result<WordStore, LoadError> {
        match self {
            Self::Builtin => Ok(WordStore::builtin()),
            Self::File(path) => WordStore::load(path),
        }
    }
}

impl std::fmt::Display for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
