//! View events.
//!
//! The rule core never touches a rendering surface. Mutations return
//! `ViewEvent`s describing the visual change, and whoever hosts the game
//! forwards them to a view.

use serde::{Serialize, Deserialize};

use crate::game::types::Position;

/// Classes rendered on one cell of the initial map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ViewEvent {
    /// Render a fresh grid. Only cells with at least one class are listed.
    InitializeMap {
        width: i32,
        height: i32,
        cells: Vec<CellView>,
    },
    AddClass {
        position: Position,
        class: String,
    },
    RemoveClass {
        position: Position,
        class: String,
    },
}

impl ViewEvent {
    pub fn add_class(position: Position, class: &str) -> Self {
        Self::AddClass { position, class: class.to_string() }
    }

    pub fn remove_class(position: Position, class: &str) -> Self {
        Self::RemoveClass { position, class: class.to_string() }
    }
}
