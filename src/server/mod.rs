// src/server/mod.rs

//! Server layer root module.
//!
//! This module hosts the game behind actix:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (wander timers, viewers, player commands)

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
