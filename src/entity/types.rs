//! Simulated actors and pickups.

use crate::core::constants::*;
use crate::core::geometry::Position;
use serde::{Deserialize, Serialize};

/// Stable identifier, unique within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// What a pickup does when the player touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Adds `amount` to the player's gold
    Gold { amount: u32 },
    /// Consumable, +1 agility
    AgilityPotion,
    /// Permanent trinket, +1 agility
    AgilityRing,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Gold { .. } => "Gold",
            ItemKind::AgilityPotion => "Agility Potion",
            ItemKind::AgilityRing => "Ring of Agility",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ItemKind::Gold { .. } => COLOR_GOLD,
            ItemKind::AgilityPotion => COLOR_POTION_AGILITY,
            ItemKind::AgilityRing => COLOR_RING_AGILITY,
        }
    }

    pub fn size(&self) -> f64 {
        match self {
            ItemKind::Gold { .. } => GOLD_SIZE,
            ItemKind::AgilityPotion => POTION_SIZE,
            ItemKind::AgilityRing => RING_SIZE,
        }
    }

    /// Map symbol.
    pub fn glyph(&self) -> char {
        match self {
            ItemKind::Gold { .. } => '$',
            ItemKind::AgilityPotion => '!',
            ItemKind::AgilityRing => '=',
        }
    }

    /// Agility granted on pickup.
    pub fn agility_bonus(&self) -> i32 {
        match self {
            ItemKind::Gold { .. } => 0,
            ItemKind::AgilityPotion | ItemKind::AgilityRing => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Monster,
    Item(ItemKind),
    Trap,
}

/// Monster behaviour state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    Sleep,
    /// Declared for completeness; nothing transitions into it
    Wander,
    Hunt,
}

/// Transient swing display: direction plus remaining seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackVisual {
    pub active: bool,
    pub angle: f64,
    pub timer: f64,
}

impl AttackVisual {
    pub fn trigger(&mut self, angle: f64) {
        self.active = true;
        self.angle = angle;
        self.timer = ATTACK_DURATION;
    }

    pub fn decay(&mut self, dt: f64) {
        if !self.active {
            return;
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.active = false;
        }
    }
}

/// Attributes owned by a single actor.
///
/// `hp` may dip below zero for the remainder of the attack that killed the
/// actor; death is processed before the attack returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub str: i32,
    pub armor: i32,
    pub exp: u32,
    pub level: u32,
    pub gold: u32,
    pub souls: u32,
    pub speed: f64,
    pub agility: i32,
}

impl Stats {
    /// Starting stats for a fresh run before meta-progression bonuses.
    pub fn base_player() -> Self {
        Self {
            hp: BASE_PLAYER_HP,
            max_hp: BASE_PLAYER_HP,
            str: BASE_PLAYER_STR,
            armor: BASE_PLAYER_ARMOR,
            exp: 0,
            level: 1,
            gold: 0,
            souls: 0,
            speed: BASE_PLAYER_SPEED,
            agility: BASE_PLAYER_AGILITY,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// `1 + agility / 50`: multiplies move speed and divides attack cooldown.
    pub fn agility_multiplier(&self) -> f64 {
        1.0 + self.agility as f64 / AGILITY_DIVISOR
    }

    pub fn effective_speed(&self) -> f64 {
        self.speed * self.agility_multiplier()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    /// Collision and render radius
    pub size: f64,
    pub color: &'static str,
    pub glyph: char,
    pub label: String,
    pub stats: Option<Stats>,
    pub cooldown: f64,
    pub max_cooldown: f64,
    pub ai: Option<AiState>,
    pub attack_visual: AttackVisual,
}

impl Entity {
    pub fn player(id: EntityId, pos: Position, stats: Stats) -> Self {
        Self {
            id,
            kind: EntityKind::Player,
            pos,
            size: ACTOR_SIZE,
            color: COLOR_PLAYER,
            glyph: '@',
            label: "You".to_string(),
            stats: Some(stats),
            cooldown: 0.0,
            max_cooldown: PLAYER_ATTACK_COOLDOWN,
            ai: None,
            attack_visual: AttackVisual::default(),
        }
    }

    pub fn monster(id: EntityId, pos: Position, name: &str, glyph: char, stats: Stats) -> Self {
        Self {
            id,
            kind: EntityKind::Monster,
            pos,
            size: ACTOR_SIZE,
            color: COLOR_MONSTER,
            glyph,
            label: name.to_string(),
            stats: Some(stats),
            cooldown: 0.0,
            max_cooldown: MONSTER_ATTACK_COOLDOWN,
            ai: Some(AiState::Sleep),
            attack_visual: AttackVisual::default(),
        }
    }

    pub fn item(id: EntityId, pos: Position, item: ItemKind) -> Self {
        Self {
            id,
            kind: EntityKind::Item(item),
            pos,
            size: item.size(),
            color: item.color(),
            glyph: item.glyph(),
            label: item.name().to_string(),
            stats: None,
            cooldown: 0.0,
            max_cooldown: 0.0,
            ai: None,
            attack_visual: AttackVisual::default(),
        }
    }

    pub fn trap(id: EntityId, pos: Position) -> Self {
        Self {
            id,
            kind: EntityKind::Trap,
            pos,
            size: TRAP_SIZE,
            color: COLOR_TRAP,
            glyph: '^',
            label: "Trap".to_string(),
            stats: None,
            cooldown: 0.0,
            max_cooldown: 0.0,
            ai: None,
            attack_visual: AttackVisual::default(),
        }
    }

    pub fn is_monster(&self) -> bool {
        self.kind == EntityKind::Monster
    }

    pub fn item_kind(&self) -> Option<ItemKind> {
        match self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.as_ref().is_some_and(Stats::is_alive)
    }

    /// Whether this entity's collision circle overlaps `other`'s.
    pub fn touches(&self, other: &Entity) -> bool {
        self.pos.distance_to(other.pos) < self.size + other.size
    }
}
