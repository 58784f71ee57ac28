use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::types::Direction;
use crate::game::view::ViewEvent;

/// One view event pushed to a viewer.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct ViewUpdate(pub ViewEvent);

// Client -> server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    Move(Direction),
    Ping,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe {
    pub viewer_id: Uuid,
    pub addr: Recipient<ViewUpdate>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Unsubscribe {
    pub viewer_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerCommand {
    pub viewer_id: Uuid,
    pub action: ClientAction,
}

/// Cancels every wandering timer of the session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct StopGame;

#[derive(Message)]
#[rtype(result = "SessionStatus")]
pub struct GetStatus;

#[derive(Serialize, Clone, Debug)]
pub struct SessionStatus {
    pub game_id: Uuid,
    pub ticks: u64,
    pub running: bool,
    pub viewers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_action_json() {
        let action: ClientAction = serde_json::from_str(r#"{"action":"Move","data":"Left"}"#).unwrap();
        assert_eq!(action, ClientAction::Move(Direction::Left));

        let ping: ClientAction = serde_json::from_str(r#"{"action":"Ping"}"#).unwrap();
        assert_eq!(ping, ClientAction::Ping);

        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"Shoot","data":{"x":1}}"#).is_err());
    }
}
