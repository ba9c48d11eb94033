//! Word scrambling
//!
//! All scramblers take their randomness from the caller so results are
//! reproducible under a fixed seed.

mod strategy;

pub use strategy::{RandomSortScrambler, Scrambler, ScramblerType, ShuffleScrambler};
