use serde::{Serialize, Deserialize};

/// Map coordinates. Not bounds-checked: the map decides what is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// (dx, dy) applied by one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// One step of a river path.
///
/// River paths use their own axis convention: `r` and `l` walk along y,
/// `u` and `d` walk along x. This is not the same mapping as `Direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiverStep {
    R,
    U,
    L,
    D,
}

impl RiverStep {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(RiverStep::R),
            'u' => Some(RiverStep::U),
            'l' => Some(RiverStep::L),
            'd' => Some(RiverStep::D),
            _ => None,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            RiverStep::R => (0, 1),
            RiverStep::U => (-1, 0),
            RiverStep::L => (0, -1),
            RiverStep::D => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
    }

    #[test]
    fn test_river_steps_use_their_own_axes() {
        assert_eq!(RiverStep::from_code('r').map(RiverStep::offset), Some((0, 1)));
        assert_eq!(RiverStep::from_code('u').map(RiverStep::offset), Some((-1, 0)));
        assert_eq!(RiverStep::from_code('l').map(RiverStep::offset), Some((0, -1)));
        assert_eq!(RiverStep::from_code('d').map(RiverStep::offset), Some((1, 0)));
        assert_eq!(RiverStep::from_code('x'), None);
    }
}
