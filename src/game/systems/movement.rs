//! Creature movement system.
//!
//! This module decides whether a creature may step into a cell and performs
//! the step when it may.

use log::debug;

use crate::game::entities::{Creature, CreatureId};
use crate::game::grid::Cell;
use crate::game::state::Game;
use crate::game::types::Direction;

/// A cell is enterable when it is passable and any door on it can be operated.
pub fn creature_can_enter_cell(creature: &Creature, cell: &Cell) -> bool {
    if !cell.is_passable() {
        return false;
    }
    if cell.has_door() && !creature.can_operate_doors() {
        return false;
    }
    true
}

/// Try to move the creature one step in `direction`.
/// Returns false, leaving the game untouched, when the step leaves the map
/// or the destination cannot be entered.
pub fn try_creature_move(game: &mut Game, id: CreatureId, direction: Direction) -> bool {
    let Some(creature) = game.creature(id) else {
        return false;
    };
    let Some(from) = creature.cell else {
        return false;
    };
    let Some(destination) = game.map.move_cell(from, direction) else {
        debug!("[Movement] {:?} at {:?} cannot leave the map going {:?}", id, from, direction);
        return false;
    };
    if !creature_can_enter_cell(creature, destination) {
        debug!("[Movement] {:?} blocked at {:?}", id, destination.position());
        return false;
    }

    let to = destination.position();
    game.move_creature(id, to)
}
