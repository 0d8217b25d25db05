//! Soul Altar purchases and starting-stat bonuses.

use super::types::{GameUpgrade, MetaProgress, UpgradeError};

/// Purchased level of an upgrade, 0 if never bought.
pub fn upgrade_level(meta: &MetaProgress, id: &str) -> u32 {
    meta.upgrades.get(id).copied().unwrap_or(0)
}

/// Starting-stat bonus for `id` at the level recorded in `meta`.
/// Unknown ids and unpurchased upgrades give 0.
pub fn upgrade_bonus(meta: &MetaProgress, id: &str) -> i32 {
    match GameUpgrade::lookup(id) {
        Some(upgrade) => upgrade.effect(upgrade_level(meta, id)),
        None => 0,
    }
}

/// Whether the next level of `upgrade` is affordable and not past the cap.
pub fn can_afford(meta: &MetaProgress, upgrade: &GameUpgrade) -> bool {
    upgrade_level(meta, upgrade.id.id()) < upgrade.max_level && meta.souls >= upgrade.cost
}

/// Buys one level of `id`, spending souls. Returns the new level.
pub fn try_buy_upgrade(meta: &mut MetaProgress, id: &str) -> Result<u32, UpgradeError> {
    let upgrade =
        GameUpgrade::lookup(id).ok_or_else(|| UpgradeError::UnknownUpgrade(id.to_string()))?;

    let current = upgrade_level(meta, id);
    if current >= upgrade.max_level {
        return Err(UpgradeError::MaxLevel {
            name: upgrade.name,
            max_level: upgrade.max_level,
        });
    }
    if meta.souls < upgrade.cost {
        return Err(UpgradeError::InsufficientSouls {
            needed: upgrade.cost,
            available: meta.souls,
        });
    }

    meta.souls -= upgrade.cost;
    let new_level = current + 1;
    meta.upgrades.insert(id.to_string(), new_level);
    tracing::info!(upgrade = id, new_level, souls_left = meta.souls, "upgrade purchased");
    Ok(new_level)
}

/// Adds the souls a finished run earned.
pub fn bank_souls(meta: &mut MetaProgress, souls: u32) {
    meta.souls = meta.souls.saturating_add(souls);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::types::{UpgradeId, UPGRADES};

    fn meta_with_souls(souls: u32) -> MetaProgress {
        MetaProgress {
            souls,
            ..Default::default()
        }
    }

    #[test]
    fn test_bonus_zero_for_unknown_or_unbought() {
        let mut meta = MetaProgress::default();
        assert_eq!(upgrade_bonus(&meta, "max_hp"), 0);
        meta.upgrades.insert("luck".to_string(), 3);
        assert_eq!(upgrade_bonus(&meta, "luck"), 0);
    }

    #[test]
    fn test_bonus_uses_purchased_level() {
        let mut meta = MetaProgress::default();
        meta.upgrades.insert("max_hp".to_string(), 2);
        assert_eq!(upgrade_bonus(&meta, "max_hp"), 10);
    }

    #[test]
    fn test_buy_spends_souls() {
        let mut meta = meta_with_souls(120);
        assert_eq!(try_buy_upgrade(&mut meta, "agility"), Ok(1));
        assert_eq!(try_buy_upgrade(&mut meta, "agility"), Ok(2));
        assert_eq!(meta.souls, 20);
        assert_eq!(upgrade_level(&meta, "agility"), 2);
    }

    #[test]
    fn test_buy_refuses_when_poor() {
        let mut meta = meta_with_souls(49);
        assert_eq!(
            try_buy_upgrade(&mut meta, "base_damage"),
            Err(UpgradeError::InsufficientSouls {
                needed: 50,
                available: 49
            })
        );
        assert_eq!(meta.souls, 49);
        assert!(meta.upgrades.is_empty());
    }

    #[test]
    fn test_buy_refuses_past_max_level() {
        let mut meta = meta_with_souls(1000);
        meta.upgrades.insert("max_hp".to_string(), 10);
        assert!(matches!(
            try_buy_upgrade(&mut meta, "max_hp"),
            Err(UpgradeError::MaxLevel { max_level: 10, .. })
        ));
        assert_eq!(meta.souls, 1000);
    }

    #[test]
    fn test_buy_refuses_unknown() {
        let mut meta = meta_with_souls(1000);
        assert_eq!(
            try_buy_upgrade(&mut meta, "flight"),
            Err(UpgradeError::UnknownUpgrade("flight".to_string()))
        );
    }

    #[test]
    fn test_can_afford_matches_buy() {
        let meta = meta_with_souls(50);
        for upgrade in &UPGRADES {
            assert!(can_afford(&meta, upgrade));
        }
        let mut maxed = meta_with_souls(50);
        maxed
            .upgrades
            .insert(UpgradeId::Agility.id().to_string(), 10);
        assert!(!can_afford(&maxed, &UPGRADES[2]));
    }

    #[test]
    fn test_bank_souls_accumulates() {
        let mut meta = meta_with_souls(5);
        bank_souls(&mut meta, 7);
        assert_eq!(meta.souls, 12);
    }
}
