//! Game client core
//!
//! Session state machine, server transport and effect driver shared by the
//! TUI and the simple line-based client.

pub mod api;
pub mod config;
pub mod driver;
pub mod session;

pub use api::{ClientError, GameApi, HttpGameApi};
pub use config::ClientConfig;
pub use session::{Accuracy, ClientEvent, Effect, Phase, Session, SessionError, SessionStats};
