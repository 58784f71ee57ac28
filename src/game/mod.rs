//! Game rule core: map, cells, creatures and movement.
//!
//! Nothing in here knows about actors or sockets. Visual changes leave the
//! core as `view::ViewEvent`s.

pub mod types;
pub mod errors;
pub mod view;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;
