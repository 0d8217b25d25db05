//! Meta-progression data structures and the upgrade catalog.

use crate::core::constants::{UPGRADE_COST, UPGRADE_MAX_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Progress that survives death: souls to spend and purchased upgrades.
///
/// Unknown upgrade ids are kept as-is and contribute no bonus, so files
/// written by newer builds still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaProgress {
    pub souls: u32,
    /// Upgrade id -> purchased level
    pub upgrades: HashMap<String, u32>,
    pub unlocks: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    MaxHp,
    BaseDamage,
    Agility,
}

impl UpgradeId {
    /// Key used in [`MetaProgress::upgrades`].
    pub fn id(&self) -> &'static str {
        match self {
            UpgradeId::MaxHp => "max_hp",
            UpgradeId::BaseDamage => "base_damage",
            UpgradeId::Agility => "agility",
        }
    }
}

/// One entry of the Soul Altar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameUpgrade {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Souls per level
    pub cost: u32,
    pub max_level: u32,
    per_level: i32,
}

impl GameUpgrade {
    /// Additive bonus granted at `level`.
    pub fn effect(&self, level: u32) -> i32 {
        level as i32 * self.per_level
    }

    pub fn lookup(id: &str) -> Option<&'static GameUpgrade> {
        UPGRADES.iter().find(|u| u.id.id() == id)
    }
}

pub static UPGRADES: [GameUpgrade; 3] = [
    GameUpgrade {
        id: UpgradeId::MaxHp,
        name: "Vitality",
        description: "Increases Max HP by 5 per level.",
        cost: UPGRADE_COST,
        max_level: UPGRADE_MAX_LEVEL,
        per_level: 5,
    },
    GameUpgrade {
        id: UpgradeId::BaseDamage,
        name: "Strength",
        description: "Increases Damage by 1 per level.",
        cost: UPGRADE_COST,
        max_level: UPGRADE_MAX_LEVEL,
        per_level: 1,
    },
    GameUpgrade {
        id: UpgradeId::Agility,
        name: "Agility",
        description: "Increases Agility by 1 per level (Speed & Atk Speed).",
        cost: UPGRADE_COST,
        max_level: UPGRADE_MAX_LEVEL,
        per_level: 1,
    },
];

/// Why a Soul Altar purchase was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("unknown upgrade: {0}")]
    UnknownUpgrade(String),

    #[error("{name} is already at max level {max_level}")]
    MaxLevel { name: &'static str, max_level: u32 },

    #[error("not enough souls: need {needed}, have {available}")]
    InsufficientSouls { needed: u32, available: u32 },
}
