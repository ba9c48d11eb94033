//! Colored console output for the line-based client

use super::formatters::{hint_text, timer_bar, verdict_text};
use crate::client::{Session, SessionStats};
use colored::Colorize;

/// Print the welcome banner and command list
pub fn print_banner(server: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Server: {}", server.bright_white());
    println!("Unscramble as many words as you can before the timer runs out.\n");
    println!("Type your guess and press Enter. Commands:");
    println!("  - {}     reveal the first letter", ":hint".bright_cyan());
    println!(
        "  - {}  start a new game after time is up",
        ":restart".bright_cyan()
    );
    println!("  - {}     exit\n", ":quit".bright_cyan());
}

/// Print the current puzzle with the remaining time
pub fn print_puzzle(session: &Session) {
    let Some(puzzle) = session.puzzle() else {
        println!("{}", "Waiting for a word from the server...".bright_black());
        return;
    };

    let remaining = session.time_remaining();
    println!("{}", "─".repeat(60).cyan());
    println!(
        "[{}] {}s   Scrambled word: {}",
        timer_bar(remaining, session.round_seconds(), 20).green(),
        remaining,
        puzzle.scrambled().bright_yellow().bold()
    );
    if let Some(ch) = session.visible_hint() {
        println!("{}", hint_text(ch).bright_cyan());
    }
}

/// Print the verdict of the last checked guess
pub fn print_verdict(correct: bool) {
    let text = verdict_text(correct);
    if correct {
        println!("{}", format!("✅ {text}").green().bold());
    } else {
        println!("{}", format!("❌ {text}").red().bold());
    }
}

/// Print the score line
pub fn print_score(session: &Session) {
    let stats = session.stats();
    println!(
        "Score: {}/{}   Accuracy: {}%",
        stats.correct.to_string().bright_green(),
        stats.total,
        session.accuracy().to_string().bright_yellow()
    );
}

/// Print the end-of-round summary
pub fn print_round_summary(stats: SessionStats) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    ⏰  T I M E ' S   U P !  ⏰    ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Correct answers: {}",
        stats.correct.to_string().bright_green().bold()
    );
    println!("  Total guesses:   {}", stats.total);
    println!(
        "  Accuracy:        {}%",
        stats.accuracy().to_string().bright_yellow().bold()
    );
    println!(
        "\nType {} to play again or {} to exit.\n",
        ":restart".bright_cyan(),
        ":quit".bright_cyan()
    );
}
