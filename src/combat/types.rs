//! Combat data structures.

use crate::core::geometry::Position;
use crate::entity::EntityId;

/// Who is swinging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attacker {
    Player,
    Monster(EntityId),
}

/// Something that happened while resolving attacks or monster behaviour.
///
/// The session turns these into log lines and floating damage numbers; the
/// combat code never touches presentation state itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// A sleeping monster noticed the player
    MonsterWoke { id: EntityId, name: String },
    /// The player's swing connected
    PlayerHit {
        target: EntityId,
        target_name: String,
        damage: i32,
        at: Position,
    },
    /// A monster's swing connected
    MonsterHit {
        attacker: EntityId,
        attacker_name: String,
        damage: i32,
        at: Position,
    },
    /// A monster died and its rewards went to the player
    MonsterSlain {
        id: EntityId,
        name: String,
        exp: u32,
        souls: u32,
    },
    /// Player reached a new level
    LeveledUp { new_level: u32 },
    /// The player died carrying `souls`
    PlayerSlain { souls: u32 },
}
