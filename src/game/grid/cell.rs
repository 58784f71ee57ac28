//! A single map tile and its contents.

use crate::game::entities::{Creature, Item};
use crate::game::types::Position;
use crate::game::view::ViewEvent;

#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    contents: Vec<Item>,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Position { x, y },
            contents: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Items in insertion (stacking) order.
    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    /// Classes the view shows on this cell for its items.
    pub fn classes(&self) -> Vec<String> {
        self.contents.iter().map(|item| item.item_type().to_string()).collect()
    }

    /// Occupancy lives on the creature, so entering only produces the visual change.
    pub fn creature_enter(&self, creature: &Creature) -> ViewEvent {
        ViewEvent::add_class(self.position, creature.creature_type())
    }

    pub fn creature_leave(&self, creature: &Creature) -> ViewEvent {
        ViewEvent::remove_class(self.position, creature.creature_type())
    }

    pub fn add_item(&mut self, item: Item) -> ViewEvent {
        self.contents.push(item);
        ViewEvent::add_class(self.position, item.item_type())
    }

    /// Removes the first occurrence of `item`. Absent items are a no-op.
    pub fn remove_item(&mut self, item: Item) -> Option<(Item, ViewEvent)> {
        let index = self.contents.iter().position(|i| *i == item)?;
        let removed = self.contents.remove(index);
        Some((removed, ViewEvent::remove_class(self.position, removed.item_type())))
    }

    /// Removes the oldest item.
    pub fn pop_item(&mut self) -> Option<(Item, ViewEvent)> {
        let head = *self.contents.first()?;
        self.remove_item(head)
    }

    pub fn is_passable(&self) -> bool {
        !self.contents.iter().any(|item| item.is_impassable())
    }

    pub fn has_door(&self) -> bool {
        self.contents.iter().any(|item| item.is_door())
    }
}
