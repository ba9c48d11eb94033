//! Core domain types for the word scramble game
//!
//! Pure value types shared by the service and the clients.

mod puzzle;
mod word;

pub use puzzle::{GuessResult, Puzzle};
pub use word::{Word, WordError};
