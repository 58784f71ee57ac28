//! Game rendering system (terminal).
//!
//! Text picture of the board, used in debug logs and tests.

use crate::game::entities::{CreatureKind, Item};
use crate::game::state::Game;
use crate::game::types::Position;

/// One character per cell, one line per row.
/// Creatures win over items; among items the newest one shows.
pub fn render_map(game: &Game) -> String {
    let map = &game.map;
    let mut out = String::with_capacity(((map.width() + 1) * map.height()) as usize);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let pos = Position { x, y };
            out.push(symbol_at(game, pos));
        }
        out.push('\n');
    }
    out
}

fn symbol_at(game: &Game, pos: Position) -> char {
    let occupant = std::iter::once(&game.player)
        .chain(game.creatures.iter())
        .find(|creature| creature.cell == Some(pos));
    if let Some(creature) = occupant {
        return match creature.kind {
            CreatureKind::Player => '@',
            CreatureKind::Ammonite => 'a',
        };
    }

    match game.map.get(pos).and_then(|cell| cell.contents().last()) {
        Some(Item::Water) => '~',
        Some(Item::WoodDoor) => '+',
        Some(Item::Boulder) => '#',
        None => '.',
    }
}
