//! Word representation
//!
//! A Word is a non-empty string taken verbatim from the word list.

use rustc_hash::FxHashMap;
use std::fmt;

/// A puzzle word
///
/// No case folding or content validation is applied; the only invariant is
/// that the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text is empty.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "Apple");
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First character of the word, used for hints
    #[inline]
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Number of characters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Count of each character in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        char_counts(&self.text)
    }

    /// Check whether `candidate` uses exactly the same characters as this word
    #[must_use]
    pub fn is_permutation(&self, candidate: &str) -> bool {
        self.char_len() == candidate.chars().count() && self.char_counts() == char_counts(candidate)
    }
}

fn char_counts(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_keeps_text_verbatim() {
        let word = Word::new("Apple").unwrap();
        assert_eq!(word.text(), "Apple");

        let word = Word::new(" grape ").unwrap();
        assert_eq!(word.text(), " grape ");
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_first_char() {
        assert_eq!(Word::new("crane").unwrap().first_char(), Some('c'));
        assert_eq!(Word::new("élan").unwrap().first_char(), Some('é'));
    }

    #[test]
    fn word_char_len_counts_chars() {
        assert_eq!(Word::new("crane").unwrap().char_len(), 5);
        assert_eq!(Word::new("café").unwrap().char_len(), 4);
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("apple").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'a'), Some(&1));
        assert_eq!(counts.get(&'p'), Some(&2));
        assert_eq!(counts.get(&'l'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_is_permutation() {
        let word = Word::new("apple").unwrap();
        assert!(word.is_permutation("apple"));
        assert!(word.is_permutation("pplea"));
        assert!(!word.is_permutation("aple"));
        assert!(!word.is_permutation("applf"));
        assert!(!word.is_permutation("Apple"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_is_case_sensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("crane").unwrap();
        let word3 = Word::new("CRANE").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
