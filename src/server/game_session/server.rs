use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, error, info, warn};

use crate::config::game::GameConfig;
use crate::game::errors::MapError;
use crate::game::state::Game;
use crate::game::systems::render_map;
use crate::server::game_session::messages::{
    ClientAction, GetStatus, PlayerCommand, SessionStatus, StopGame, Subscribe, Unsubscribe, ViewUpdate,
};

/// Hosts one game: drives its wander timers and fans view events out to viewers.
pub struct GameSession {
    pub game_id: Uuid,
    game: Game,
    viewers: HashMap<Uuid, Recipient<ViewUpdate>>,
    wander_timers: Vec<SpawnHandle>,
    ticks: u64,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        if let Err(e) = self.game.start() {
            error!("[GameSession] Failed to start game_id={}: {}", self.game_id, e);
            ctx.stop();
            return;
        }
        info!("[GameSession] Game started: game_id={}", self.game_id);
        debug!("[GameSession] Initial board:\n{}", render_map(&self.game));

        self.schedule_wanderers(ctx);
        self.broadcast();
    }

    fn stopping(&mut self, ctx: &mut Self::Context) -> Running {
        self.stop_game(ctx);
        Running::Stop
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, MapError> {
        Ok(Self {
            game_id: Uuid::new_v4(),
            game: Game::new(config)?,
            viewers: HashMap::new(),
            wander_timers: Vec::new(),
            ticks: 0,
        })
    }

    /// One interval timer per active wander task.
    fn schedule_wanderers(&mut self, ctx: &mut Context<Self>) {
        for task in self.game.wander_tasks().iter().filter(|t| t.is_active()) {
            if task.period.is_zero() {
                warn!("[GameSession] Wander task {} has a zero period, not scheduled", task.id);
                continue;
            }
            let task_id = task.id;
            let handle = ctx.run_interval(task.period, move |act, _ctx| {
                act.wander_tick(task_id);
            });
            self.wander_timers.push(handle);
        }
        debug!("[GameSession] {} wander timer(s) scheduled", self.wander_timers.len());
    }

    fn wander_tick(&mut self, task_id: usize) {
        self.ticks += 1;
        let mut rng = rand::rng();
        if self.game.wander_tick(task_id, &mut rng) {
            self.broadcast();
        }
    }

    fn stop_game(&mut self, ctx: &mut Context<Self>) {
        if self.wander_timers.is_empty() && !self.game.is_running() {
            return;
        }
        for handle in self.wander_timers.drain(..) {
            ctx.cancel_future(handle);
        }
        self.game.stop();
        info!("[GameSession] Game stopped: game_id={} after {} tick(s)", self.game_id, self.ticks);
    }

    /// Sends every buffered view event to every viewer, in order.
    fn broadcast(&mut self) {
        let events = self.game.drain_events();
        if events.is_empty() {
            return;
        }
        for addr in self.viewers.values() {
            for event in &events {
                addr.do_send(ViewUpdate(event.clone()));
            }
        }
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        // A late viewer first gets the whole board.
        msg.addr.do_send(ViewUpdate(self.game.snapshot()));
        self.viewers.insert(msg.viewer_id, msg.addr);
        info!("[GameSession] Viewer {} joined game_id={} ({} viewer(s))", msg.viewer_id, self.game_id, self.viewers.len());
    }
}

impl Handler<Unsubscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Unsubscribe, _: &mut Context<Self>) -> Self::Result {
        if self.viewers.remove(&msg.viewer_id).is_some() {
            info!("[GameSession] Viewer {} left game_id={}", msg.viewer_id, self.game_id);
        }
    }
}

impl Handler<PlayerCommand> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: PlayerCommand, _: &mut Context<Self>) -> Self::Result {
        if !self.viewers.contains_key(&msg.viewer_id) {
            warn!("[GameSession] Command from unknown viewer {}", msg.viewer_id);
            return;
        }
        match msg.action {
            ClientAction::Move(direction) => {
                if self.game.move_player(direction) {
                    self.broadcast();
                } else {
                    debug!("[GameSession] Player move {:?} rejected", direction);
                }
            }
            ClientAction::Ping => {}
        }
    }
}

impl Handler<StopGame> for GameSession {
    type Result = ();

    fn handle(&mut self, _: StopGame, ctx: &mut Context<Self>) -> Self::Result {
        self.stop_game(ctx);
    }
}

impl Handler<GetStatus> for GameSession {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _: GetStatus, _: &mut Context<Self>) -> Self::Result {
        MessageResult(SessionStatus {
            game_id: self.game_id,
            ticks: self.ticks,
            running: self.game.is_running(),
            viewers: self.viewers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use crate::game::types::{Direction, Position};
    use crate::game::view::ViewEvent;

    struct Collector {
        events: Arc<Mutex<Vec<ViewEvent>>>,
    }

    impl Actor for Collector {
        type Context = Context<Self>;
    }

    impl Handler<ViewUpdate> for Collector {
        type Result = ();

        fn handle(&mut self, msg: ViewUpdate, _: &mut Context<Self>) -> Self::Result {
            self.events.lock().unwrap().push(msg.0);
        }
    }

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::empty(5, 5);
        config.player_start = Position::new(0, 0);
        // Long enough that no tick fires during a test.
        config.wander_period = Duration::from_secs(3600);
        config
    }

    #[actix::test]
    async fn test_subscriber_gets_snapshot_then_moves() {
        let session = GameSession::new(quiet_config()).unwrap().start();
        let events = Arc::new(Mutex::new(Vec::new()));
        let collector = Collector { events: events.clone() }.start();
        let viewer_id = Uuid::new_v4();

        session.send(Subscribe { viewer_id, addr: collector.recipient() }).await.unwrap();
        session.send(PlayerCommand { viewer_id, action: ClientAction::Move(Direction::Down) }).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let events = events.lock().unwrap();
        assert!(matches!(events[0], ViewEvent::InitializeMap { width: 5, height: 5, .. }));
        assert_eq!(events[1..], [
            ViewEvent::remove_class(Position::new(0, 0), "player"),
            ViewEvent::add_class(Position::new(0, 1), "player"),
        ]);
    }

    #[actix::test]
    async fn test_unknown_viewer_cannot_move_player() {
        let session = GameSession::new(quiet_config()).unwrap().start();
        session.send(PlayerCommand { viewer_id: Uuid::new_v4(), action: ClientAction::Move(Direction::Down) }).await.unwrap();

        let status = session.send(GetStatus).await.unwrap();
        assert_eq!(status.viewers, 0);
        assert!(status.running);
    }

    #[actix::test]
    async fn test_stop_game_cancels_wandering() {
        let mut config = quiet_config();
        config.wander_period = Duration::from_millis(5);
        let session = GameSession::new(config).unwrap().start();

        tokio::time::sleep(Duration::from_millis(60)).await;
        let before = session.send(GetStatus).await.unwrap();
        assert!(before.ticks > 0);
        assert!(before.running);

        session.send(StopGame).await.unwrap();
        let stopped = session.send(GetStatus).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        let after = session.send(GetStatus).await.unwrap();

        assert!(!after.running);
        assert_eq!(after.ticks, stopped.ticks);
    }
}
