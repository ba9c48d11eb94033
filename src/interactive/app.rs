//! TUI application state and logic

use crate::client::driver;
use crate::client::{ClientConfig, ClientEvent, Effect, GameApi, Phase, Session};
use crate::output::formatters::hint_text;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Countdown resolution
const TICK: Duration = Duration::from_secs(1);

/// Longest wait for a key press before redrawing
const POLL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub server: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    last_tick: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let server = config.server.clone();
        Self {
            session: Session::new(config),
            server,
            messages: vec![Message {
                text: "Welcome! Press Enter to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    /// Handle a key press, returning a server request to run
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            _ => {}
        }

        match self.session.phase() {
            Phase::Idle => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => self.start(),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
            Phase::Playing => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => {
                    self.hint();
                    None
                }
                KeyCode::Backspace => {
                    self.session.pop_char();
                    None
                }
                KeyCode::Char(c) => {
                    self.session.push_char(c);
                    None
                }
                _ => None,
            },
            Phase::Expired => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => {
                    self.restart();
                    None
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            },
        }
    }

    /// Apply a server response
    pub fn handle_event(&mut self, event: ClientEvent) -> Option<Effect> {
        self.session.handle(event)
    }

    /// Advance the countdown by every full second elapsed since the last tick
    pub fn poll_timer(&mut self, now: Instant) {
        if self.session.phase() != Phase::Playing {
            self.last_tick = now;
            return;
        }
        while now.saturating_duration_since(self.last_tick) >= TICK {
            self.last_tick += TICK;
            if self.session.tick() {
                let summary = format!(
                    "Time's up! {} of {} correct. Press Enter to restart.",
                    self.session.stats().correct,
                    self.session.stats().total
                );
                self.add_message(&summary, MessageStyle::Info);
                break;
            }
        }
    }

    /// Time until the next countdown tick is due
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        TICK.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    fn start(&mut self) -> Option<Effect> {
        match self.session.start() {
            Ok(effect) => {
                self.last_tick = Instant::now();
                self.messages.clear();
                self.add_message("Game started! Unscramble the word.", MessageStyle::Info);
                Some(effect)
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        match self.session.submit() {
            Ok(effect) => Some(effect),
            Err(e) => {
                self.add_message(&format!("Cannot submit: {e}"), MessageStyle::Error);
                None
            }
        }
    }

    fn hint(&mut self) {
        match self.session.hint() {
            Ok(ch) => self.add_message(&hint_text(ch), MessageStyle::Success),
            Err(e) => self.add_message(&format!("No hint: {e}"), MessageStyle::Error),
        }
    }

    fn restart(&mut self) {
        match self.session.restart() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("Game reset. Press Enter to start.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Must be called from within a tokio runtime; server requests are spawned
/// onto it.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<A>(app: App, api: A) -> Result<()>
where
    A: GameApi + Clone + Sync + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, &api);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, A>(terminal: &mut Terminal<B>, mut app: App, api: &A) -> Result<()>
where
    B: ratatui::backend::Backend,
    A: GameApi + Clone + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        let timeout = app.until_next_tick(Instant::now()).min(POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(effect) = app.handle_key(key)
        {
            driver::dispatch(api, effect, tx.clone());
        }

        while let Ok(event) = rx.try_recv() {
            if let Some(effect) = app.handle_event(event) {
                driver::dispatch(api, effect, tx.clone());
            }
        }

        app.poll_timer(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Puzzle, Word};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded(app: &mut App, original: &str) {
        let round = app.session.round();
        app.handle_event(ClientEvent::PuzzleLoaded {
            round,
            puzzle: Puzzle::new(
                Word::new(original).unwrap(),
                original.chars().rev().collect::<String>(),
            ),
        });
    }

    #[test]
    fn enter_starts_game() {
        let mut app = App::new(ClientConfig::default());
        let effect = app.handle_key(key(KeyCode::Enter));

        assert_eq!(effect, Some(Effect::FetchPuzzle { round: 1 }));
        assert_eq!(app.session.phase(), Phase::Playing);
    }

    #[test]
    fn typing_and_submitting_a_guess() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));
        loaded(&mut app, "pear");

        for c in "peax".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('r')));

        let effect = app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            effect,
            Some(Effect::Validate {
                round: 1,
                original: "pear".to_string(),
                answer: "pear".to_string(),
            })
        );
    }

    #[test]
    fn q_is_typed_while_playing() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));
        loaded(&mut app, "quiz");

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.session.guess(), "q");
    }

    #[test]
    fn tab_reveals_hint() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));
        loaded(&mut app, "grape");

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.visible_hint(), Some('g'));
    }

    #[test]
    fn submit_before_puzzle_reports_error() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn timer_expires_round_and_enter_restarts() {
        let mut app = App::new(ClientConfig {
            round_seconds: 2,
            ..ClientConfig::default()
        });
        app.handle_key(key(KeyCode::Enter));

        let later = app.last_tick + Duration::from_millis(2500);
        app.poll_timer(later);
        assert_eq!(app.session.phase(), Phase::Expired);
        assert!(!app.session.input_enabled());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.session.time_remaining(), 2);
    }

    #[test]
    fn partial_second_does_not_tick() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));

        let later = app.last_tick + Duration::from_millis(900);
        app.poll_timer(later);
        assert_eq!(app.session.time_remaining(), 30);
        assert_eq!(app.until_next_tick(later), Duration::from_millis(100));
    }

    #[test]
    fn ctrl_c_quits_in_any_phase() {
        let mut app = App::new(ClientConfig::default());
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new(ClientConfig::default());
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
