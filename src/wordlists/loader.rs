//! Word list loading utilities
//!
//! Parses CSV word lists with a header row naming a `Word` column.

use super::csv::{self, HeaderError};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use super::csv::WORD_COLUMN;

/// Errors that can occur while loading a word list
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list has no header row")]
    MissingHeader,

    #[error("word list header has no `Word` column")]
    MissingWordColumn,
}

impl From<HeaderError> for LoadError {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::Missing => Self::MissingHeader,
            HeaderError::NoWordColumn => Self::MissingWordColumn,
        }
    }
}

/// Load words from a CSV file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or a header error if
/// the file has no `Word` column.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/english-words.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    words_from_csv(&content)
}

/// Parse words from CSV text, preserving file order
///
/// Rows whose `Word` cell is empty or missing are skipped. No trimming,
/// de-duplication or case normalization is applied to the words.
///
/// # Errors
///
/// Returns an error if the header row is missing or lacks a `Word` column.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_csv;
///
/// let words = words_from_csv("Rank,Word\n1,apple\n2,grape\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "grape");
/// ```
pub fn words_from_csv(content: &str) -> Result<Vec<Word>, LoadError> {
    let words = csv::word_cells(content)?
        .into_iter()
        .filter_map(|cell| Word::new(cell).ok())
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::BUILTIN_WORDS;
///
/// let words = words_from_slice(BUILTIN_WORDS);
/// assert_eq!(words.len(), BUILTIN_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn csv_single_column() {
        let words = words_from_csv("Word\napple\ngrape\n").unwrap();
        assert_eq!(texts(&words), ["apple", "grape"]);
    }

    #[test]
    fn csv_selects_word_column() {
        let words = words_from_csv("Rank,Word,Length\n1,apple,5\n2,kiwi,4\n").unwrap();
        assert_eq!(texts(&words), ["apple", "kiwi"]);
    }

    #[test]
    fn csv_preserves_order_and_duplicates() {
        let words = words_from_csv("Word\npear\napple\npear\n").unwrap();
        assert_eq!(texts(&words), ["pear", "apple", "pear"]);
    }

    #[test]
    fn csv_does_not_normalize_case() {
        let words = words_from_csv("Word\nApple\nAPPLE\n").unwrap();
        assert_eq!(texts(&words), ["Apple", "APPLE"]);
    }

    #[test]
    fn csv_skips_empty_and_short_rows() {
        let words = words_from_csv("Rank,Word\n1,apple\n2,\n3\n\n4,grape\n").unwrap();
        assert_eq!(texts(&words), ["apple", "grape"]);
    }

    #[test]
    fn csv_handles_crlf_and_bom() {
        let words = words_from_csv("\u{feff}Word\r\napple\r\ngrape\r\n").unwrap();
        assert_eq!(texts(&words), ["apple", "grape"]);
    }

    #[test]
    fn csv_quoted_fields() {
        let words = words_from_csv("Note,Word\n\"a, b\",apple\n\"x\",\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(texts(&words), ["apple", "say \"hi\""]);
    }

    #[test]
    fn csv_header_only_yields_no_words() {
        let words = words_from_csv("Word\n").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn csv_missing_header() {
        assert!(matches!(words_from_csv(""), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn csv_missing_word_column() {
        assert!(matches!(
            words_from_csv("word\napple\n"),
            Err(LoadError::MissingWordColumn)
        ));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_from_file("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn load_bundled_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/english-words.csv");
        let words = load_from_file(path).unwrap();
        assert_eq!(words.len(), crate::wordlists::BUILTIN_WORDS_COUNT);
        assert_eq!(words[0].text(), "apple");
    }

    #[test]
    fn bundled_file_matches_embedded_list() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/english-words.csv");
        let words = load_from_file(path).unwrap();
        assert_eq!(crate::wordlists::WordStore::builtin().words(), words.as_slice());
    }

    #[test]
    fn csv_padding_is_kept() {
        let words = words_from_csv("Word\n apple \n\"grape \"\n").unwrap();
        assert_eq!(texts(&words), [" apple ", "grape "]);
    }

    #[test]
    fn words_from_slice_converts_and_skips_empty() {
        let words = words_from_slice(&["crane", "", "slate"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }
}
