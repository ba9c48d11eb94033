//! Simple interactive CLI mode
//!
//! Line-based game client without TUI

use crate::client::driver;
use crate::client::{ClientConfig, ClientEvent, Effect, GameApi, Phase, Session};
use crate::output::{
    print_banner, print_puzzle, print_round_summary, print_score, print_verdict,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Countdown resolution
const TICK: Duration = Duration::from_secs(1);

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Hint,
    Restart,
    Quit,
    Guess(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line {
            ":hint" | ":h" => Self::Hint,
            ":restart" | ":r" => Self::Restart,
            ":quit" | ":q" => Self::Quit,
            guess => Self::Guess(guess.to_string()),
        }
    }
}

/// What the input loop does after a line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Request(Effect),
    Quit,
}

/// Turns elapsed wall time into whole-second session ticks
#[derive(Debug, Clone, Copy)]
struct Clock {
    last_tick: Instant,
}

impl Clock {
    fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    fn next_tick(&self) -> Instant {
        self.last_tick + TICK
    }

    /// Apply every full second elapsed since the last tick
    ///
    /// Returns `true` if this ended the round.
    fn catch_up(&mut self, session: &mut Session, now: Instant) -> bool {
        if session.phase() != Phase::Playing {
            self.last_tick = now;
            return false;
        }
        let seconds = now.saturating_duration_since(self.last_tick).as_secs();
        self.last_tick += Duration::from_secs(seconds);
        session.advance(seconds)
    }
}

/// Run the simple interactive CLI mode
///
/// Server requests run in the background so the countdown keeps going while
/// they are in flight.
///
/// # Errors
///
/// Returns an error if reading standard input fails.
pub async fn run_simple<A>(api: &A, config: ClientConfig) -> Result<()>
where
    A: GameApi + Clone + Sync + 'static,
{
    print_banner(&config.server);

    let mut session = Session::new(config);
    let mut clock = Clock::new(Instant::now());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (tx, mut rx) = mpsc::unbounded_channel();

    prompt(&session)?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match handle_line(&mut session, &mut clock, &line) {
                    Flow::Quit => break,
                    Flow::Request(effect) => driver::dispatch(api, effect, tx.clone()),
                    Flow::Continue => {}
                }
                prompt(&session)?;
            }
            Some(event) = rx.recv() => {
                if clock.catch_up(&mut session, Instant::now()) {
                    print_round_summary(session.stats());
                }
                if let Some(effect) = handle_event(&mut session, event) {
                    driver::dispatch(api, effect, tx.clone());
                }
                prompt(&session)?;
            }
            () = time::sleep_until(clock.next_tick()), if session.phase() == Phase::Playing => {
                if clock.catch_up(&mut session, Instant::now()) {
                    print_round_summary(session.stats());
                    prompt(&session)?;
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply one line of input to the session
fn handle_line(session: &mut Session, clock: &mut Clock, line: &str) -> Flow {
    let command = Command::parse(line);
    if command == Command::Quit {
        return Flow::Quit;
    }

    match session.phase() {
        Phase::Idle => match session.start() {
            Ok(effect) => {
                clock.last_tick = Instant::now();
                println!("{}", "Game started! Fetching a word...".bright_black());
                return Flow::Request(effect);
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        Phase::Playing => match command {
            Command::Hint => match session.hint() {
                Ok(_) => print_puzzle(session),
                Err(e) => println!("{}", format!("No hint: {e}").red()),
            },
            Command::Restart => {
                println!("{}", "You can restart once time is up.".bright_black());
            }
            Command::Guess(guess) => {
                session.set_guess(guess);
                match session.submit() {
                    Ok(effect) => return Flow::Request(effect),
                    Err(e) => println!("{}", format!("Cannot submit: {e}").red()),
                }
            }
            Command::Quit => {}
        },
        Phase::Expired => match command {
            Command::Restart => {
                if session.restart().is_ok() {
                    println!("\n🔄 Game reset!\n");
                }
            }
            _ => println!("{}", "Time's up! Type :restart or :quit.".bright_black()),
        },
    }

    Flow::Continue
}

/// Apply a server response and print what changed
fn handle_event(session: &mut Session, event: ClientEvent) -> Option<Effect> {
    let answered = session.stats().total;
    let loaded = matches!(event, ClientEvent::PuzzleLoaded { .. });
    let effect = session.handle(event);

    if session.stats().total > answered
        && let Some(correct) = session.verdict()
    {
        print_verdict(correct);
        print_score(session);
    }
    if loaded && session.phase() == Phase::Playing {
        print_puzzle(session);
    }
    effect
}

fn prompt(session: &Session) -> io::Result<()> {
    match session.phase() {
        Phase::Idle => print!("Press Enter to start: "),
        Phase::Playing => print!("Your guess: "),
        Phase::Expired => print!("> "),
    }
    io::stdout().flush()
}
