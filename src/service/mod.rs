//! Game service
//!
//! Transport-independent `GetWord` / `ValidateGuess` operations.

mod game;

pub use game::{GameError, GameService};
