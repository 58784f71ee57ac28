//! Game entities module.
//!
//! This module organizes item and creature entity types.

pub mod item;
pub mod creature;

pub use item::*;
pub use creature::*;
