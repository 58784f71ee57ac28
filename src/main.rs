//! Main entry point for the game server.
//!
//! Builds the game from its configuration, starts the game session actor and
//! launches the HTTP server with the viewer WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use server::game_session::messages::StopGame;
use server::game_session::server::GameSession;

use crate::config::game::GameConfig;
use crate::config::server::{BIND_ADDRESS, BIND_PORT};

pub mod config;
mod server;
mod game;
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the GameSession actor (owns the game and its wander timers).
    let game_session = match GameSession::new(GameConfig::default()) {
        Ok(session) => session.start(),
        Err(e) => {
            error!("[Server] Invalid game configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session.clone()));

    info!("[Server] Listening on {}:{}", BIND_ADDRESS, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_ADDRESS, BIND_PORT))?
    .run()
    .await?;

    // The server is down: tear the wander timers down with it.
    if let Err(e) = game_session.send(StopGame).await {
        error!("[Server] Failed to stop game session: {}", e);
    }
    Ok(())
}
