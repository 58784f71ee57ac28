/// WebSocket session handler for game viewers.
///
/// This actor manages one browser view: it subscribes to the game session,
/// forwards every view event as a JSON text frame, and relays player
/// commands sent by the client.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse, error, http::StatusCode};
use actix_web_actors::ws;
use log::{info, warn};
use std::borrow::Cow;
use uuid::Uuid;

use crate::server::game_session::messages::{ClientAction, GetStatus, PlayerCommand, Subscribe, Unsubscribe, ViewUpdate};
use crate::server::game_session::server::GameSession;
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct ViewSession {
    pub viewer_id: Uuid,
    pub name: String,
    pub session_addr: Addr<GameSession>,
}

impl Actor for ViewSession {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the viewer with the game session.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[ViewSession] {} connected as viewer {}", self.name, self.viewer_id);
        self.session_addr.do_send(Subscribe {
            viewer_id: self.viewer_id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(Unsubscribe {
            viewer_id: self.viewer_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ViewSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientAction>(&text) {
                    Ok(ClientAction::Ping) => {}
                    Ok(action) => {
                        self.session_addr.do_send(PlayerCommand {
                            viewer_id: self.viewer_id,
                            action,
                        });
                    }
                    Err(e) => {
                        warn!("[ViewSession] Invalid command from {}: {}", self.viewer_id, e);
                        let context = self.viewer_id.to_string();
                        ctx.text(ws_error_message("INVALID_COMMAND", "Invalid client message", Some(&context)));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ViewUpdate> for ViewSession {
    type Result = ();

    fn handle(&mut self, msg: ViewUpdate, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg.0) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[ViewSession] Failed to serialize view event: {}", e);
                ctx.text(ws_error_message("SERIALIZATION_FAILED", "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// Viewer name from the `name` query parameter, or one derived from the viewer id.
fn viewer_name(query: &str, viewer_id: &Uuid) -> String {
    let name = query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(key, _)| *key == "name")
        .map(|(_, value)| {
            urlencoding::decode(value)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .into_owned()
        })
        .unwrap_or_default();

    if name.is_empty() {
        format!("viewer_{}", &viewer_id.simple().to_string()[..8])
    } else {
        name
    }
}

/// WebSocket endpoint for game viewers.
///
/// Accepts an optional `name` query parameter, used in logs.
pub async fn ws_view(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let status = data.game_session
        .send(GetStatus)
        .await
        .map_err(error::ErrorInternalServerError)?;

    if !status.running {
        let context = status.game_id.to_string();
        return Ok(http_error_response(
            "GAME_STOPPED",
            "The game is no longer running.",
            Some(&context),
            StatusCode::SERVICE_UNAVAILABLE,
        ));
    }

    let viewer_id = Uuid::new_v4();
    let name = viewer_name(req.query_string(), &viewer_id);

    ws::start(
        ViewSession {
            viewer_id,
            name,
            session_addr: data.game_session.clone(),
        },
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_name_is_decoded() {
        let id = Uuid::new_v4();
        assert_eq!(viewer_name("name=Ana%20Lyse&x=1", &id), "Ana Lyse");
    }

    #[test]
    fn test_viewer_name_defaults_to_id_prefix() {
        let id = Uuid::new_v4();
        let name = viewer_name("other=1", &id);
        assert_eq!(name, format!("viewer_{}", &id.simple().to_string()[..8]));
        assert_eq!(viewer_name("name=", &id), name);
    }
}
