//! Formatting utilities for terminal output

/// Hint line for a word starting with `first`
#[must_use]
pub fn hint_text(first: char) -> String {
    format!("Hint: The word starts with '{first}'")
}

/// Verdict line for a checked guess
#[must_use]
pub const fn verdict_text(correct: bool) -> &'static str {
    if correct {
        "Correct!"
    } else {
        "Incorrect! Try Again!"
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Countdown bar for the seconds left in a round
#[must_use]
pub fn timer_bar(remaining: u32, total: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(total), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_names_first_letter() {
        assert_eq!(hint_text('g'), "Hint: The word starts with 'g'");
    }

    #[test]
    fn verdict_lines() {
        assert_eq!(verdict_text(true), "Correct!");
        assert_eq!(verdict_text(false), "Incorrect! Try Again!");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn timer_bar_zero_total_is_empty() {
        assert_eq!(timer_bar(0, 0, 4), "░░░░");
        assert_eq!(timer_bar(15, 30, 4), "██░░");
    }
}
