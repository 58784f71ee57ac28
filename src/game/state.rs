use std::time::Duration;

use log::info;
use rand::Rng;

use crate::config::game::GameConfig;
use crate::game::entities::{Creature, CreatureId, CreatureKind, Item};
use crate::game::errors::MapError;
use crate::game::grid::GameMap;
use crate::game::systems::try_creature_move;
use crate::game::types::{Direction, Position};
use crate::game::view::{CellView, ViewEvent};

/// Periodic random-direction movement of one creature.
#[derive(Debug, Clone)]
pub struct WanderTask {
    pub id: usize,
    pub creature: CreatureId,
    pub period: Duration,
    active: bool,
}

impl WanderTask {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub map: GameMap,
    pub player: Creature,
    pub creatures: Vec<Creature>,
    wander_tasks: Vec<WanderTask>,
    events: Vec<ViewEvent>,
}

impl Game {
    /// Builds the board described by `config`: rivers, then doors, then boulders.
    pub fn new(config: GameConfig) -> Result<Self, MapError> {
        let mut map = GameMap::new(config.width, config.height);

        for river in &config.rivers {
            let path = GameMap::parse_river_path(&river.path)?;
            map.draw_river(river.start, &path)?;
        }
        for pos in &config.doors {
            map.place_item(*pos, Item::WoodDoor)?;
        }
        for pos in &config.boulders {
            map.place_item(*pos, Item::Boulder)?;
        }

        Ok(Game {
            config,
            map,
            player: Creature::player(),
            creatures: Vec::new(),
            wander_tasks: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Asks the view to render the map, then places the creatures.
    pub fn start(&mut self) -> Result<(), MapError> {
        let snapshot = self.snapshot();
        self.events.push(snapshot);
        self.initialize_creatures()
    }

    /// Places the player and one ammonite, and schedules the ammonite's wandering.
    pub fn initialize_creatures(&mut self) -> Result<(), MapError> {
        let events = self.map.place_creature(&mut self.player, self.config.player_start)?;
        self.events.extend(events);

        let id = CreatureId::Wanderer(self.creatures.len());
        let mut ammonite = Creature::new(id, CreatureKind::Ammonite);
        let events = self.map.place_creature(&mut ammonite, self.config.ammonite_start)?;
        self.events.extend(events);
        self.creatures.push(ammonite);

        self.wander_tasks.push(WanderTask {
            id: self.wander_tasks.len(),
            creature: id,
            period: self.config.wander_period,
            active: true,
        });
        info!(
            "[Game] Creatures placed: player at {:?}, ammonite at {:?}",
            self.config.player_start, self.config.ammonite_start
        );
        Ok(())
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        match id {
            CreatureId::Player => Some(&self.player),
            CreatureId::Wanderer(index) => self.creatures.get(index),
        }
    }

    pub fn try_creature_move(&mut self, id: CreatureId, direction: Direction) -> bool {
        try_creature_move(self, id, direction)
    }

    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.try_creature_move(CreatureId::Player, direction)
    }

    /// Moves a creature to `to`: leaves the old cell, enters the new one.
    /// Legality is the caller's job.
    pub fn move_creature(&mut self, id: CreatureId, to: Position) -> bool {
        let Game { map, player, creatures, events, .. } = self;
        let creature = match id {
            CreatureId::Player => player,
            CreatureId::Wanderer(index) => match creatures.get_mut(index) {
                Some(creature) => creature,
                None => return false,
            },
        };
        let Some(destination) = map.get(to) else {
            return false;
        };

        if let Some(previous) = creature.cell.and_then(|old| map.get(old)) {
            events.push(previous.creature_leave(creature));
        }
        creature.cell = Some(to);
        events.push(destination.creature_enter(creature));
        true
    }

    pub fn wander_tasks(&self) -> &[WanderTask] {
        &self.wander_tasks
    }

    /// One wandering tick: a random direction, then a move attempt.
    /// Ticks of a cancelled task do nothing.
    pub fn wander_tick<R: Rng>(&mut self, task_id: usize, rng: &mut R) -> bool {
        let creature = match self.wander_tasks.get(task_id) {
            Some(task) if task.active => task.creature,
            _ => return false,
        };
        let direction = self.map.random_direction(rng);
        self.try_creature_move(creature, direction)
    }

    /// Cancels every wander task.
    pub fn stop(&mut self) {
        for task in self.wander_tasks.iter_mut() {
            task.active = false;
        }
        info!("[Game] Stopped {} wander task(s)", self.wander_tasks.len());
    }

    pub fn is_running(&self) -> bool {
        self.wander_tasks.iter().any(WanderTask::is_active)
    }

    /// Current board as an `InitializeMap` event: item classes, then creature classes.
    pub fn snapshot(&self) -> ViewEvent {
        let mut cells: Vec<CellView> = self.map.cells()
            .map(|cell| CellView { position: cell.position(), classes: cell.classes() })
            .collect();

        for creature in std::iter::once(&self.player).chain(self.creatures.iter()) {
            if let Some(pos) = creature.cell {
                let index = (pos.y * self.map.width() + pos.x) as usize;
                if let Some(view) = cells.get_mut(index) {
                    view.classes.push(creature.creature_type().to_string());
                }
            }
        }
        cells.retain(|view| !view.classes.is_empty());

        ViewEvent::InitializeMap {
            width: self.map.width(),
            height: self.map.height(),
            cells,
        }
    }

    /// Hands the buffered view events to the caller.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}
