//! Melee attack resolution: targeting, damage, death, and leveling.

use super::types::{Attacker, CombatEvent};
use crate::core::constants::*;
use crate::core::geometry::{angle_difference, Position};
use crate::entity::{Entity, EntityStore, Stats};
use rand::Rng;

/// `floor(str * 0.2 + U[0, 2) + 1)`
pub fn roll_damage<R: Rng>(strength: i32, rng: &mut R) -> i32 {
    (strength as f64 * DAMAGE_STR_FACTOR + rng.gen::<f64>() * DAMAGE_SPREAD + DAMAGE_FLOOR).floor()
        as i32
}

/// Picks the closest candidate strictly within `ATTACK_RANGE` of `origin`.
///
/// With `cone = Some(arc)`, candidates must also lie within `arc / 2` of the
/// `aim` angle. Ties keep the first candidate found.
pub fn select_target<I>(origin: Position, aim: f64, cone: Option<f64>, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, Position)>,
{
    let mut best: Option<usize> = None;
    let mut best_distance = ATTACK_RANGE;

    for (index, pos) in candidates {
        let distance = origin.distance_to(pos);
        if distance >= best_distance {
            continue;
        }
        if let Some(arc) = cone {
            if angle_difference(aim, origin.angle_to(pos)) >= arc / 2.0 {
                continue;
            }
        }
        best = Some(index);
        best_distance = distance;
    }

    best
}

/// Grants a kill's rewards. Returns the new level if the player leveled up.
///
/// At most one level is gained per kill.
pub fn grant_kill_rewards(stats: &mut Stats, exp: u32, souls: u32) -> Option<u32> {
    stats.souls += souls;
    stats.exp += exp;
    if stats.exp > stats.level * EXP_PER_LEVEL {
        stats.level += 1;
        stats.max_hp += LEVEL_UP_MAX_HP;
        stats.hp = stats.max_hp;
        stats.str += LEVEL_UP_STR;
        return Some(stats.level);
    }
    None
}

/// Resolves one melee swing aimed at `target` (world space).
///
/// The attacker's swing visual is always triggered, hit or miss. At most one
/// victim is struck; a victim at or below zero hp is killed before this
/// returns.
pub fn resolve_attack<R: Rng>(
    store: &mut EntityStore,
    attacker: Attacker,
    target: Position,
    rng: &mut R,
) -> Vec<CombatEvent> {
    match attacker {
        Attacker::Player => player_attack(store, target, rng),
        Attacker::Monster(id) => match store.index_of(id) {
            Some(index) => monster_attack(store, index, target, rng),
            None => Vec::new(),
        },
    }
}

fn player_attack<R: Rng>(store: &mut EntityStore, target: Position, rng: &mut R) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let (Some(player), entities) = store.split_mut() else {
        return events;
    };

    let aim = player.pos.angle_to(target);
    player.attack_visual.trigger(aim);

    let candidates = entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_monster())
        .map(|(i, e)| (i, e.pos));
    let Some(index) = select_target(player.pos, aim, Some(ATTACK_ARC), candidates) else {
        return events;
    };
    let Some(strength) = player.stats.as_ref().map(|s| s.str) else {
        return events;
    };

    let victim = &mut entities[index];
    let Some(victim_stats) = victim.stats.as_mut() else {
        return events;
    };
    let damage = roll_damage(strength, rng);
    victim_stats.hp -= damage;
    let slain = victim_stats.hp <= 0;
    events.push(CombatEvent::PlayerHit {
        target: victim.id,
        target_name: victim.label.clone(),
        damage,
        at: victim.pos,
    });

    if slain {
        let dead = entities.remove(index);
        events.extend(slay_monster(player, dead));
    }
    events
}

fn slay_monster(player: &mut Entity, dead: Entity) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let (exp, souls) = dead
        .stats
        .as_ref()
        .map(|s| (s.exp, s.souls))
        .unwrap_or_default();

    tracing::info!(monster = %dead.label, exp, souls, "monster slain");
    events.push(CombatEvent::MonsterSlain {
        id: dead.id,
        name: dead.label,
        exp,
        souls,
    });

    if let Some(stats) = player.stats.as_mut() {
        if let Some(new_level) = grant_kill_rewards(stats, exp, souls) {
            tracing::info!(new_level, max_hp = stats.max_hp, "player leveled up");
            events.push(CombatEvent::LeveledUp { new_level });
        }
    }
    events
}

fn monster_attack<R: Rng>(
    store: &mut EntityStore,
    index: usize,
    target: Position,
    rng: &mut R,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let (player, entities) = store.split_mut();
    let monster = &mut entities[index];

    let aim = monster.pos.angle_to(target);
    monster.attack_visual.trigger(aim);

    let Some(player) = player else {
        return events;
    };
    if select_target(monster.pos, aim, None, [(0, player.pos)]).is_none() {
        return events;
    }
    let Some(strength) = monster.stats.as_ref().map(|s| s.str) else {
        return events;
    };
    let Some(player_stats) = player.stats.as_mut() else {
        return events;
    };

    let damage = roll_damage(strength, rng);
    player_stats.hp -= damage;
    events.push(CombatEvent::MonsterHit {
        attacker: monster.id,
        attacker_name: monster.label.clone(),
        damage,
        at: player.pos,
    });

    if player_stats.hp <= 0 {
        tracing::info!(killer = %monster.label, souls = player_stats.souls, "player died");
        events.push(CombatEvent::PlayerSlain {
            souls: player_stats.souls,
        });
    }
    events
}
