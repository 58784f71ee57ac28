use thiserror::Error;

use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("position {0:?} is outside the map")]
    OutOfBounds(Position),
    #[error("unknown river step code '{0}'")]
    UnknownRiverStep(char),
}
