//! Scramble strategies
//!
//! Defines the Scrambler trait and concrete implementations.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// A strategy for permuting the characters of a word
pub trait Scrambler {
    /// Produce a permutation of `word`'s characters using `rng`
    ///
    /// The result is not guaranteed to differ from the input.
    fn scramble<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String;
}

/// Enum wrapper for all scrambler types
///
/// Allows runtime selection of scrambler while maintaining static dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScramblerType {
    /// Uniform Fisher-Yates shuffle (default)
    #[default]
    Shuffle,
    /// Insertion sort with a coin-flip comparator
    RandomSort,
}

impl Scrambler for ScramblerType {
    fn scramble<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        match self {
            Self::Shuffle => ShuffleScrambler.scramble(word, rng),
            Self::RandomSort => RandomSortScrambler.scramble(word, rng),
        }
    }
}

impl ScramblerType {
    /// Create scrambler from name string
    ///
    /// Supported names: "shuffle", "fisher-yates", "random-sort", "sort"
    /// Defaults to shuffle if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random-sort" | "sort" => Self::RandomSort,
            _ => Self::Shuffle,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shuffle => "shuffle",
            Self::RandomSort => "random-sort",
        }
    }
}

impl fmt::Display for ScramblerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fisher-Yates shuffle over the word's characters
///
/// Every permutation is equally likely for a uniform `rng`.
pub struct ShuffleScrambler;

impl Scrambler for ShuffleScrambler {
    fn scramble<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        chars.shuffle(rng);
        chars.into_iter().collect()
    }
}

/// Insertion sort driven by a random comparator
///
/// Each incoming character walks left past existing ones while a fair coin
/// says "less than". Characters rarely travel far, so short words are often
/// only lightly mixed.
pub struct RandomSortScrambler;

impl Scrambler for RandomSortScrambler {
    fn scramble<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> String {
        let mut sorted: Vec<char> = Vec::with_capacity(word.len());
        for ch in word.chars() {
            let mut pos = sorted.len();
            while pos > 0 && rng.random_bool(0.5) {
                pos -= 1;
            }
            sorted.insert(pos, ch);
        }
        sorted.into_iter().collect()
    }
}
