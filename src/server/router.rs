//! HTTP and WebSocket routing configuration.

use actix_web::web;
use crate::server::game_session::session::ws_view;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/view")
            .to(ws_view)
    );
}
