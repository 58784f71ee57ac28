//! Items placed in map cells.

use serde::{Serialize, Deserialize};

/// Tag of the wooden door item. Also the CSS class the view applies.
pub const WOOD_DOOR_TAG: &str = "wood-door";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Water,
    WoodDoor,
    Boulder,
}

impl Item {
    /// Rendering tag of the item.
    pub fn item_type(self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::WoodDoor => WOOD_DOOR_TAG,
            Item::Boulder => "boulder",
        }
    }

    /// Whether a cell holding this item blocks every creature.
    pub fn is_impassable(self) -> bool {
        match self {
            Item::Water | Item::Boulder => true,
            Item::WoodDoor => false,
        }
    }

    /// Only the wooden door carries door semantics.
    pub fn is_door(self) -> bool {
        matches!(self, Item::WoodDoor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wood_door_is_a_door() {
        assert!(Item::WoodDoor.is_door());
        assert!(!Item::Water.is_door());
        assert!(!Item::Boulder.is_door());
        assert_eq!(Item::WoodDoor.item_type(), "wood-door");
    }

    #[test]
    fn test_passability_flags() {
        assert!(Item::Water.is_impassable());
        assert!(Item::Boulder.is_impassable());
        assert!(!Item::WoodDoor.is_impassable());
    }
}
