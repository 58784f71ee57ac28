// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the game session actor, shared between the
//! HTTP/WebSocket handlers.

use actix::Addr;
use crate::server::game_session::server::GameSession;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session actor (owns the game and its timers).
    pub game_session: Addr<GameSession>,
}

impl AppState {
    pub fn new(game_session: Addr<GameSession>) -> Self {
        AppState { game_session }
    }
}
