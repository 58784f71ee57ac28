//! Map module.
//!
//! The grid of cells and the queries movement is built on.

pub mod cell;
pub mod map;

pub use cell::*;
pub use map::*;
