//! Failures of gameplay transitions on an already generated dungeon.
//! Generation itself never fails; unknown names degrade to defaults instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("room {0} does not exist in this dungeon")]
    UnknownRoom(u32),
    #[error("room {room} has no trap at index {index}")]
    UnknownTrap { room: u32, index: usize },
    #[error("trap {index} in room {room} has already been triggered")]
    TrapAlreadyTriggered { room: u32, index: usize },
    #[error("room {0} has no puzzle")]
    NoPuzzle(u32),
}
