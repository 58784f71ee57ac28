//! Creature entity logic.
//!
//! A creature occupies at most one cell. The cell is referenced by position;
//! the creature never owns it.

use serde::{Serialize, Deserialize};

use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureId {
    Player,
    Wanderer(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureKind {
    Player,
    Ammonite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub kind: CreatureKind,
    pub cell: Option<Position>,
}

impl Creature {
    pub fn new(id: CreatureId, kind: CreatureKind) -> Self {
        Self {
            id,
            kind,
            cell: None,
        }
    }

    pub fn player() -> Self {
        Self::new(CreatureId::Player, CreatureKind::Player)
    }

    /// Rendering tag, applied as a class on the occupied cell.
    pub fn creature_type(&self) -> &'static str {
        match self.kind {
            CreatureKind::Player => "player",
            CreatureKind::Ammonite => "ammonite",
        }
    }

    pub fn can_operate_doors(&self) -> bool {
        match self.kind {
            CreatureKind::Player => true,
            CreatureKind::Ammonite => false,
        }
    }
}
