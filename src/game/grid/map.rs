use rand::Rng;

use crate::game::entities::{Creature, Item};
use crate::game::errors::MapError;
use crate::game::grid::cell::Cell;
use crate::game::types::{Direction, Position, RiverStep};
use crate::game::view::ViewEvent;

/// Fixed-size grid of cells, stored row-major as `cells[y][x]`.
#[derive(Debug, Clone)]
pub struct GameMap {
    width: i32,
    height: i32,
    cells: Vec<Vec<Cell>>,
}

impl GameMap {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = (0..height)
            .map(|y| (0..width).map(|x| Cell::new(x, y)).collect())
            .collect();

        Self { width, height, cells }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Exclusive upper bound: `x == width` and `y == height` are outside.
    pub fn position_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.position_out_of_bounds(pos) {
            return None;
        }
        Some(&self.cells[pos.y as usize][pos.x as usize])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.position_out_of_bounds(pos) {
            return None;
        }
        Some(&mut self.cells[pos.y as usize][pos.x as usize])
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Uniform pick among the four cardinal directions.
    pub fn random_direction<R: Rng>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }

    pub fn calculate_new_position(&self, pos: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.offset();
        Position { x: pos.x + dx, y: pos.y + dy }
    }

    /// Destination cell of a one-step move, `None` when it leaves the map.
    /// Passability is not checked here.
    pub fn move_cell(&self, from: Position, dir: Direction) -> Option<&Cell> {
        let new_pos = self.calculate_new_position(from, dir);
        self.get(new_pos)
    }

    /// Puts `creature` on the cell at `pos`.
    /// A creature that was already placed leaves its previous cell first.
    pub fn place_creature(&self, creature: &mut Creature, pos: Position) -> Result<Vec<ViewEvent>, MapError> {
        let cell = self.get(pos).ok_or(MapError::OutOfBounds(pos))?;
        let mut events = Vec::with_capacity(2);

        if let Some(previous) = creature.cell.and_then(|old| self.get(old)) {
            events.push(previous.creature_leave(creature));
        }
        creature.cell = Some(pos);
        events.push(cell.creature_enter(creature));
        Ok(events)
    }

    pub fn place_item(&mut self, pos: Position, item: Item) -> Result<ViewEvent, MapError> {
        let cell = self.get_mut(pos).ok_or(MapError::OutOfBounds(pos))?;
        Ok(cell.add_item(item))
    }

    pub fn parse_river_path(path: &str) -> Result<Vec<RiverStep>, MapError> {
        path.chars()
            .map(|code| RiverStep::from_code(code).ok_or(MapError::UnknownRiverStep(code)))
            .collect()
    }

    /// Lays one Water item per step of `path`, walking from `start`.
    /// The start cell itself gets no water. The whole path is checked before
    /// anything is placed, so a failed river leaves the map unchanged.
    pub fn draw_river(&mut self, start: Position, path: &[RiverStep]) -> Result<Vec<ViewEvent>, MapError> {
        let mut position = start;
        let mut course = Vec::with_capacity(path.len());

        for step in path {
            let (dx, dy) = step.offset();
            position = Position { x: position.x + dx, y: position.y + dy };
            if self.position_out_of_bounds(position) {
                return Err(MapError::OutOfBounds(position));
            }
            course.push(position);
        }

        course
            .into_iter()
            .map(|pos| self.place_item(pos, Item::Water))
            .collect()
    }
}
