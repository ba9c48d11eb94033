//! Executes session effects against a [`GameApi`]
//!
//! Failures are logged and dropped: the session simply does not advance.

use super::api::{ClientError, GameApi};
use super::session::{ClientEvent, Effect};
use tokio::sync::mpsc::UnboundedSender;

/// Perform one effect and return the resulting event
///
/// # Errors
///
/// Returns the transport or server error of the underlying request.
pub async fn execute<A>(api: &A, effect: Effect) -> Result<ClientEvent, ClientError>
where
    A: GameApi + Sync,
{
    match effect {
        Effect::FetchPuzzle { round } => {
            let puzzle = api.fetch_puzzle().await?;
            Ok(ClientEvent::PuzzleLoaded { round, puzzle })
        }
        Effect::Validate {
            round,
            original,
            answer,
        } => {
            let correct = api.validate(&original, &answer).await?;
            Ok(ClientEvent::GuessChecked { round, correct })
        }
    }
}

/// Run an effect in the background and post its event to `events`
///
/// The request is never cancelled; if it completes after the round ended
/// its event is still delivered.
pub fn dispatch<A>(api: &A, effect: Effect, events: UnboundedSender<ClientEvent>)
where
    A: GameApi + Clone + Sync + 'static,
{
    let api = api.clone();
    tokio::spawn(async move {
        let label = effect_label(&effect);
        match execute(&api, effect).await {
            Ok(event) => {
                // Receiver gone means the client is shutting down
                let _ = events.send(event);
            }
            Err(e) => tracing::warn!(error = %e, request = label, "Game server request failed"),
        }
    });
}

fn effect_label(effect: &Effect) -> &'static str {
    match effect {
        Effect::FetchPuzzle { .. } => "fetch word",
        Effect::Validate { .. } => "validate guess",
    }
}
