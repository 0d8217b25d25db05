//! Dungeon layout: rooms, corridors, walkability.

pub mod generation;
pub mod types;

pub use generation::{corridor_between, generate_dungeon, populate_room};
pub use types::{Dungeon, Room, RoomKind};
