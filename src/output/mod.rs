//! Terminal output formatting
//!
//! Text shared by both front ends and colored printing for simple mode.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_puzzle, print_round_summary, print_score, print_verdict};
