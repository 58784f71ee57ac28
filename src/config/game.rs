/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as map dimensions,
/// start positions and the wandering period. `GameConfig::default()` is built
/// from them and passed explicitly into `Game::new`.
use std::time::Duration;

use crate::game::types::Position;

/// Number of columns in the game map.
pub const GAME_MAP_WIDTH: i32 = 20;

/// Number of rows in the game map.
pub const GAME_MAP_HEIGHT: i32 = 12;

/// Cell the player is placed on when the game starts.
pub const PLAYER_START_POSITION: Position = Position { x: 2, y: 2 };

/// Cell the ammonite is placed on when the game starts.
pub const AMMONITE_START_POSITION: Position = Position { x: 10, y: 6 };

/// Period (in milliseconds) between two wandering moves of a creature.
pub const WANDER_PERIOD_MS: u64 = 1500;

/// A river laid on the map at build time, as a start cell and a path of step codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiverConfig {
    pub start: Position,
    pub path: String,
}

/// Everything `Game::new` needs to build a board.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub player_start: Position,
    pub ammonite_start: Position,
    pub wander_period: Duration,
    pub rivers: Vec<RiverConfig>,
    pub doors: Vec<Position>,
    pub boulders: Vec<Position>,
}

impl GameConfig {
    /// Empty board of the given size: no rivers, doors or boulders.
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            player_start: Position { x: 0, y: 0 },
            ammonite_start: Position { x: width / 2, y: height / 2 },
            wander_period: Duration::from_millis(WANDER_PERIOD_MS),
            rivers: Vec::new(),
            doors: Vec::new(),
            boulders: Vec::new(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_MAP_WIDTH,
            height: GAME_MAP_HEIGHT,
            player_start: PLAYER_START_POSITION,
            ammonite_start: AMMONITE_START_POSITION,
            wander_period: Duration::from_millis(WANDER_PERIOD_MS),
            rivers: vec![RiverConfig {
                start: Position { x: 5, y: 0 },
                path: "rrrdrrrdrrr".to_string(),
            }],
            doors: vec![Position { x: 12, y: 4 }],
            boulders: vec![Position { x: 14, y: 8 }, Position { x: 15, y: 8 }],
        }
    }
}
