//! Game Router

use super::handlers::{self, GameAppState};
use crate::service::GameService;
use axum::{
    Router,
    routing::{get, post},
};
use rand::RngCore;
use rand::rngs::StdRng;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the game router for the default service
pub fn game_router(service: Arc<GameService<StdRng>>) -> Router {
    game_router_generic(service)
}

/// Create a game router for a service with any random source
pub fn game_router_generic<R>(service: Arc<GameService<R>>) -> Router
where
    R: RngCore + Send + 'static,
{
    let state = GameAppState { service };

    Router::new()
        .route("/word", get(handlers::get_word::<R>))
        .route("/validate", post(handlers::validate::<R>))
        .route("/health", get(handlers::health::<R>))
        .with_state(state)
}

/// Game router with request tracing and permissive CORS
pub fn app(service: Arc<GameService<StdRng>>) -> Router {
    game_router(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
