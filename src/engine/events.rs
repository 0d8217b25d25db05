//! Events produced by one simulation step.

use crate::entity::{EntityId, ItemKind};

/// A single event produced by [`GameSession::update`](super::GameSession::update).
///
/// Every variant carries the log line already written to the session's
/// message log, so front-ends can show or replay it without formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Monsters ────────────────────────────────────────────────
    /// A sleeping monster started hunting.
    MonsterWoke { id: EntityId, message: String },

    // ── Combat ──────────────────────────────────────────────────
    /// The player's swing struck a monster.
    PlayerAttack {
        target: EntityId,
        damage: i32,
        message: String,
    },

    /// A monster's swing struck the player.
    MonsterAttack {
        attacker: EntityId,
        damage: i32,
        message: String,
    },

    /// A monster died; its exp and souls went to the player.
    MonsterDefeated {
        id: EntityId,
        exp: u32,
        souls: u32,
        message: String,
    },

    /// Player reached a new level.
    LeveledUp { new_level: u32, message: String },

    /// The run is over. `souls_earned` is what the owner should bank into
    /// meta-progression.
    PlayerDied { souls_earned: u32, message: String },

    // ── Pickups ─────────────────────────────────────────────────
    /// The player walked over an item and it took effect.
    ItemPickedUp { item: ItemKind, message: String },
}

impl TickEvent {
    pub fn message(&self) -> &str {
        match self {
            TickEvent::MonsterWoke { message, .. }
            | TickEvent::PlayerAttack { message, .. }
            | TickEvent::MonsterAttack { message, .. }
            | TickEvent::MonsterDefeated { message, .. }
            | TickEvent::LeveledUp { message, .. }
            | TickEvent::PlayerDied { message, .. }
            | TickEvent::ItemPickedUp { message, .. } => message,
        }
    }
}

/// Result of processing a single frame.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this frame, in the order they happened.
    pub events: Vec<TickEvent>,

    /// False when the frame was skipped (no player, or the run already ended).
    pub simulated: bool,
}

impl TickResult {
    /// Souls to bank if the player died during this frame.
    pub fn souls_earned(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            TickEvent::PlayerDied { souls_earned, .. } => Some(*souls_earned),
            _ => None,
        })
    }
}
