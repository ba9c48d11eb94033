//! Game session state machine
//!
//! A round moves `Idle -> Playing -> Expired -> Idle`. Operations that are
//! not allowed in the current phase return a [`SessionError`] and leave the
//! state untouched. Operations that need the server return an [`Effect`] for
//! the caller to execute; the result comes back as a [`ClientEvent`].

use super::config::ClientConfig;
use crate::core::Puzzle;
use std::fmt;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to start
    Idle,
    /// Timer running, input accepted
    Playing,
    /// Timer ran out; only restart is allowed
    Expired,
}

/// Server request the session wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPuzzle {
        round: u64,
    },
    Validate {
        round: u64,
        original: String,
        answer: String,
    },
}

impl Effect {
    #[must_use]
    pub fn round(&self) -> u64 {
        match self {
            Self::FetchPuzzle { round } | Self::Validate { round, .. } => *round,
        }
    }
}

/// Server response delivered back to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    PuzzleLoaded { round: u64, puzzle: Puzzle },
    GuessChecked { round: u64, correct: bool },
}

impl ClientEvent {
    #[must_use]
    pub fn round(&self) -> u64 {
        match self {
            Self::PuzzleLoaded { round, .. } | Self::GuessChecked { round, .. } => *round,
        }
    }
}

/// Rejected session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("game already started")]
    AlreadyStarted,
    #[error("game is not in progress")]
    NotPlaying,
    #[error("round has not expired")]
    NotExpired,
    #[error("no puzzle loaded yet")]
    NoPuzzle,
}

/// Guess counters for the current game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
}

impl SessionStats {
    #[must_use]
    pub fn accuracy(&self) -> Accuracy {
        if self.total == 0 {
            Accuracy::NotApplicable
        } else {
            Accuracy::Percent(f64::from(self.correct) / f64::from(self.total) * 100.0)
        }
    }
}

/// Share of correct guesses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    /// No guesses yet
    NotApplicable,
    Percent(f64),
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str("N/A"),
            Self::Percent(pct) => write!(f, "{pct:.2}"),
        }
    }
}

/// Client-side state of one game
#[derive(Debug, Clone)]
pub struct Session {
    config: ClientConfig,
    phase: Phase,
    time_remaining: u32,
    round: u64,
    puzzle: Option<Puzzle>,
    guess: String,
    verdict: Option<bool>,
    hint_visible: bool,
    stats: SessionStats,
}

impl Session {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            time_remaining: config.round_seconds,
            config,
            phase: Phase::Idle,
            round: 0,
            puzzle: None,
            guess: String::new(),
            verdict: None,
            hint_visible: false,
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn round_seconds(&self) -> u32 {
        self.config.round_seconds
    }

    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Result of the last validated guess; `None` until one arrives
    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    /// The hint character, when the hint has been revealed
    #[must_use]
    pub fn visible_hint(&self) -> Option<char> {
        if self.hint_visible {
            self.puzzle.as_ref().and_then(Puzzle::hint)
        } else {
            None
        }
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn accuracy(&self) -> Accuracy {
        self.stats.accuracy()
    }

    /// Whether the guess input, submit and hint controls are enabled
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.phase == Phase::Playing && self.time_remaining > 0
    }

    /// Start a round and request the first puzzle
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` unless the session is idle.
    pub fn start(&mut self) -> Result<Effect, SessionError> {
        if self.phase != Phase::Idle {
            return Err(SessionError::AlreadyStarted);
        }
        self.round += 1;
        self.phase = Phase::Playing;
        self.time_remaining = self.config.round_seconds;
        self.verdict = None;
        tracing::debug!(round = self.round, "Round started");
        Ok(Effect::FetchPuzzle { round: self.round })
    }

    /// Advance the countdown by one second
    ///
    /// Returns `true` if this tick ended the round.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::Expired;
            tracing::debug!(
                round = self.round,
                correct = self.stats.correct,
                total = self.stats.total,
                "Round expired"
            );
            return true;
        }
        false
    }

    /// Apply `seconds` ticks at once
    ///
    /// Returns `true` if the round ended during these ticks.
    pub fn advance(&mut self, seconds: u64) -> bool {
        for _ in 0..seconds {
            if self.phase != Phase::Playing {
                break;
            }
            if self.tick() {
                return true;
            }
        }
        false
    }

    /// Replace the guess text
    ///
    /// Ignored while input is disabled.
    pub fn set_guess(&mut self, guess: impl Into<String>) {
        if self.input_enabled() {
            self.guess = guess.into();
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if self.input_enabled() {
            self.guess.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if self.input_enabled() {
            self.guess.pop();
        }
    }

    /// Submit the current guess for validation
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` while input is disabled, or
    /// `SessionError::NoPuzzle` before the first puzzle arrives.
    pub fn submit(&mut self) -> Result<Effect, SessionError> {
        if !self.input_enabled() {
            return Err(SessionError::NotPlaying);
        }
        let puzzle = self.puzzle.as_ref().ok_or(SessionError::NoPuzzle)?;
        Ok(Effect::Validate {
            round: self.round,
            original: puzzle.original().text().to_string(),
            answer: self.guess.clone(),
        })
    }

    /// Reveal the first character of the current word
    ///
    /// Costs neither time nor score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPlaying` while input is disabled, or
    /// `SessionError::NoPuzzle` before the first puzzle arrives.
    pub fn hint(&mut self) -> Result<char, SessionError> {
        if !self.input_enabled() {
            return Err(SessionError::NotPlaying);
        }
        let hint = self
            .puzzle
            .as_ref()
            .and_then(Puzzle::hint)
            .ok_or(SessionError::NoPuzzle)?;
        self.hint_visible = true;
        Ok(hint)
    }

    /// Return to idle after a round expired, clearing all counters
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotExpired` unless the round has expired.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Expired {
            return Err(SessionError::NotExpired);
        }
        self.phase = Phase::Idle;
        self.time_remaining = self.config.round_seconds;
        self.puzzle = None;
        self.guess.clear();
        self.verdict = None;
        self.hint_visible = false;
        self.stats = SessionStats::default();
        Ok(())
    }

    /// Apply a server response
    ///
    /// A checked guess updates the counters and asks for the next puzzle.
    /// Responses from an earlier round, or arriving once the round is no
    /// longer playing, are dropped only when `discard_stale_responses` is
    /// set.
    pub fn handle(&mut self, event: ClientEvent) -> Option<Effect> {
        if self.config.discard_stale_responses
            && (event.round() != self.round || self.phase != Phase::Playing)
        {
            tracing::debug!(
                event_round = event.round(),
                round = self.round,
                phase = ?self.phase,
                "Dropping stale response"
            );
            return None;
        }

        match event {
            ClientEvent::PuzzleLoaded { puzzle, .. } => {
                if !puzzle.is_consistent() {
                    tracing::warn!(
                        original = %puzzle.original(),
                        scrambled = puzzle.scrambled(),
                        "Scrambled word is not a permutation of the original"
                    );
                }
                self.puzzle = Some(puzzle);
                self.guess.clear();
                self.hint_visible = false;
                None
            }
            ClientEvent::GuessChecked { correct, .. } => {
                self.verdict = Some(correct);
                self.stats.total += 1;
                if correct {
                    self.stats.correct += 1;
                }
                Some(Effect::FetchPuzzle { round: self.round })
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
