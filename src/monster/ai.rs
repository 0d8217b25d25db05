//! Monster behaviour: a sleep/hunt state machine.
//!
//! Sleeping monsters wake once the player comes within `MONSTER_WAKE_RANGE`.
//! Hunting monsters walk straight at the player (sliding along walls exactly
//! like player movement) and swing whenever they are within reach and off
//! cooldown. Nothing ever returns a monster to sleep.

use crate::combat::{resolve_attack, Attacker, CombatEvent};
use crate::core::constants::{MONSTER_ATTACK_REACH, MONSTER_WAKE_RANGE};
use crate::dungeon::Dungeon;
use crate::entity::{AiState, EntityStore};
use rand::Rng;

/// Advances the monster at `index` in the store's entity list by `dt` seconds.
pub fn update_monster<R: Rng>(
    store: &mut EntityStore,
    index: usize,
    dungeon: &Dungeon,
    dt: f64,
    rng: &mut R,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let Some(player_pos) = store.player().map(|p| p.pos) else {
        return events;
    };

    let (_, entities) = store.split_mut();
    let Some(monster) = entities.get_mut(index).filter(|e| e.is_monster()) else {
        return events;
    };

    let distance = monster.pos.distance_to(player_pos);
    let mut swing = false;

    match monster.ai {
        Some(AiState::Sleep) => {
            if distance < MONSTER_WAKE_RANGE {
                monster.ai = Some(AiState::Hunt);
                tracing::debug!(monster = %monster.label, distance, "monster woke");
                events.push(CombatEvent::MonsterWoke {
                    id: monster.id,
                    name: monster.label.clone(),
                });
            }
        }
        Some(AiState::Hunt) => {
            if distance > MONSTER_ATTACK_REACH {
                let speed = monster.stats.as_ref().map_or(0.0, |s| s.speed);
                let step = speed * dt / distance;
                let dx = (player_pos.x - monster.pos.x) * step;
                let dy = (player_pos.y - monster.pos.y) * step;
                dungeon.slide(&mut monster.pos, dx, dy);
            } else if monster.cooldown <= 0.0 {
                swing = true;
                monster.cooldown = monster.max_cooldown;
            }
        }
        // Wander has no behaviour yet: the monster idles in place
        Some(AiState::Wander) | None => {}
    }

    if monster.cooldown > 0.0 {
        monster.cooldown -= dt;
    }

    if swing {
        let id = monster.id;
        events.extend(resolve_attack(store, Attacker::Monster(id), player_pos, rng));
    }
    events
}
