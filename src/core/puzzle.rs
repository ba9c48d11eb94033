//! Puzzle and guess result types

use super::Word;

/// One original/scrambled word pair presented to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    original: Word,
    scrambled: String,
}

impl Puzzle {
    #[must_use]
    pub fn new(original: Word, scrambled: impl Into<String>) -> Self {
        Self {
            original,
            scrambled: scrambled.into(),
        }
    }

    #[must_use]
    pub fn original(&self) -> &Word {
        &self.original
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// The character revealed by a hint
    #[must_use]
    pub fn hint(&self) -> Option<char> {
        self.original.first_char()
    }

    /// Whether the scrambled text is a permutation of the original
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.original.is_permutation(&self.scrambled)
    }
}

/// Outcome of validating a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub correct: bool,
}

impl GuessResult {
    /// Compare a guess against the original word
    ///
    /// The guess is correct only when both values are present, the original
    /// is non-empty, and the two are byte-for-byte equal.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::GuessResult;
    ///
    /// assert!(GuessResult::evaluate(Some("apple"), Some("apple")).correct);
    /// assert!(!GuessResult::evaluate(Some("apple"), Some("Apple")).correct);
    /// assert!(!GuessResult::evaluate(None, Some("apple")).correct);
    /// ```
    #[must_use]
    pub fn evaluate(original: Option<&str>, answer: Option<&str>) -> Self {
        let correct = match (original, answer) {
            (Some(original), Some(answer)) => !original.is_empty() && original == answer,
            _ => false,
        };
        Self { correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_hint_is_first_char() {
        let puzzle = Puzzle::new(Word::new("grape").unwrap(), "pager");
        assert_eq!(puzzle.hint(), Some('g'));
    }

    #[test]
    fn puzzle_consistency() {
        let good = Puzzle::new(Word::new("grape").unwrap(), "pager");
        assert!(good.is_consistent());

        let bad = Puzzle::new(Word::new("grape").unwrap(), "paper");
        assert!(!bad.is_consistent());
    }

    #[test]
    fn evaluate_exact_match() {
        assert!(GuessResult::evaluate(Some("apple"), Some("apple")).correct);
    }

    #[test]
    fn evaluate_is_case_sensitive() {
        assert!(!GuessResult::evaluate(Some("apple"), Some("Apple")).correct);
    }

    #[test]
    fn evaluate_does_not_trim() {
        assert!(!GuessResult::evaluate(Some("apple"), Some("apple ")).correct);
        assert!(!GuessResult::evaluate(Some("apple"), Some(" apple")).correct);
    }

    #[test]
    fn evaluate_missing_values() {
        assert!(!GuessResult::evaluate(None, Some("apple")).correct);
        assert!(!GuessResult::evaluate(Some("apple"), None).correct);
        assert!(!GuessResult::evaluate(None, None).correct);
    }

    #[test]
    fn evaluate_empty_original_never_correct() {
        assert!(!GuessResult::evaluate(Some(""), Some("")).correct);
    }

    #[test]
    fn evaluate_different_words() {
        assert!(!GuessResult::evaluate(Some("apple"), Some("grape")).correct);
    }
}
