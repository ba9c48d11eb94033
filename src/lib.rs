//! Word Scramble
//!
//! An HTTP puzzle service that hands out scrambled words and checks guesses,
//! plus terminal clients that play timed rounds against it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_scramble::scramble::ScramblerType;
//! use word_scramble::service::GameService;
//! use word_scramble::wordlists::WordStore;
//!
//! let store = Arc::new(WordStore::builtin());
//! let service = GameService::seeded(store, ScramblerType::Shuffle, Some(7));
//!
//! let puzzle = service.get_word().unwrap();
//! let result = service.validate_guess(Some(puzzle.original().text()), Some("guess"));
//! println!("{} -> correct: {}", puzzle.scrambled(), result.correct);
//! ```

// Core domain types
pub mod core;

// Scramble algorithms
pub mod scramble;

// Word lists
pub mod wordlists;

// Puzzle service
pub mod service;

// HTTP server
pub mod server;

// Game client state machine and transport
pub mod client;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
