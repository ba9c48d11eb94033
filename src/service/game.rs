//! Game service operations

use crate::core::{GuessResult, Puzzle};
use crate::scramble::{Scrambler, ScramblerType};
use crate::wordlists::WordStore;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

/// Errors reported by the game service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The word store is empty (not loaded, or the load failed)
    #[error("Words not loaded yet")]
    NotReady,
}

/// Serves scrambled puzzles from a read-only word store
///
/// The store is injected at construction and never mutated. The random
/// source is the only mutable state; it is locked for the duration of one
/// pick-and-scramble.
pub struct GameService<R = StdRng> {
    store: Arc<WordStore>,
    scrambler: ScramblerType,
    rng: Mutex<R>,
}

impl GameService<StdRng> {
    /// Create a service seeded from `seed`, or from the OS when `None`
    #[must_use]
    pub fn seeded(store: Arc<WordStore>, scrambler: ScramblerType, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(store, scrambler, rng)
    }
}

impl<R: RngCore> GameService<R> {
    #[must_use]
    pub fn new(store: Arc<WordStore>, scrambler: ScramblerType, rng: R) -> Self {
        Self {
            store,
            scrambler,
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    #[must_use]
    pub fn scrambler(&self) -> ScramblerType {
        self.scrambler
    }

    /// Pick a random word and scramble it
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotReady` if the store has no words.
    pub fn get_word(&self) -> Result<Puzzle, GameError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let original = self.store.choose(&mut *rng).ok_or(GameError::NotReady)?;
        let scrambled = self.scrambler.scramble(original.text(), &mut *rng);

        Ok(Puzzle::new(original.clone(), scrambled))
    }

    /// Check a guess against the original word echoed back by the client
    ///
    /// The server keeps no record of issued puzzles, so `original` is
    /// trusted as sent.
    pub fn validate_guess(&self, original: Option<&str>, answer: Option<&str>) -> GuessResult {
        let result = GuessResult::evaluate(original, answer);
        tracing::debug!(
            original = original.unwrap_or_default(),
            answer = answer.unwrap_or_default(),
            correct = result.correct,
            "Guess validated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    /// Always yields zero, so every uniform pick lands on the lowest value
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn store(words: &[&str]) -> Arc<WordStore> {
        Arc::new(WordStore::from_words(words_from_slice(words)))
    }

    #[test]
    fn get_word_on_empty_store_is_not_ready() {
        let service =
            GameService::seeded(Arc::new(WordStore::empty()), ScramblerType::Shuffle, Some(1));
        assert_eq!(service.get_word(), Err(GameError::NotReady));
    }

    #[test]
    fn get_word_picks_index_zero_under_zero_rng() {
        let service =
            GameService::new(store(&["apple", "grape"]), ScramblerType::Shuffle, ZeroRng);
        let puzzle = service.get_word().unwrap();

        assert_eq!(puzzle.original().text(), "apple");
        assert!(puzzle.is_consistent());
    }

    #[test]
    fn get_word_scramble_is_permutation_for_every_word() {
        let words = ["apple", "grape", "mississippi", "a", "Zebra"];
        for scrambler in [ScramblerType::Shuffle, ScramblerType::RandomSort] {
            let service = GameService::seeded(store(&words), scrambler, Some(5));
            for _ in 0..100 {
                let puzzle = service.get_word().unwrap();
                assert!(words.contains(&puzzle.original().text()));
                assert!(puzzle.is_consistent(), "{puzzle:?} is not a permutation");
            }
        }
    }

    #[test]
    fn same_seed_same_puzzles() {
        let words = ["apple", "grape", "lemon", "melon"];
        let a = GameService::seeded(store(&words), ScramblerType::Shuffle, Some(99));
        let b = GameService::seeded(store(&words), ScramblerType::Shuffle, Some(99));

        for _ in 0..20 {
            assert_eq!(a.get_word().unwrap(), b.get_word().unwrap());
        }
    }

    #[test]
    fn scrambler_is_reported() {
        let service = GameService::seeded(store(&["apple"]), ScramblerType::RandomSort, Some(1));
        assert_eq!(service.scrambler(), ScramblerType::RandomSort);
        assert_eq!(service.store().len(), 1);
    }

    #[test]
    fn validate_guess_every_word_matches_itself() {
        let words = ["apple", "grape", "Apple", "x"];
        let service = GameService::seeded(store(&words), ScramblerType::Shuffle, Some(1));
        for word in words {
            assert!(service.validate_guess(Some(word), Some(word)).correct);
        }
    }

    #[test]
    fn validate_guess_rejects_other_words() {
        let service = GameService::seeded(store(&["apple"]), ScramblerType::Shuffle, Some(1));
        assert!(!service.validate_guess(Some("apple"), Some("grape")).correct);
        assert!(!service.validate_guess(Some("apple"), Some("Apple")).correct);
        assert!(!service.validate_guess(None, Some("apple")).correct);
    }

    #[test]
    fn end_to_end_apple_grape() {
        let service =
            GameService::new(store(&["apple", "grape"]), ScramblerType::Shuffle, ZeroRng);

        let puzzle = service.get_word().unwrap();
        assert_eq!(puzzle.original().text(), "apple");
        let mut scrambled: Vec<char> = puzzle.scrambled().chars().collect();
        scrambled.sort_unstable();
        assert_eq!(scrambled, ['a', 'e', 'l', 'p', 'p']);

        assert!(service.validate_guess(Some("apple"), Some("apple")).correct);
        assert!(!service.validate_guess(Some("apple"), Some("Apple")).correct);
    }
}
