//! Monster template table.

use crate::core::constants::{
    MONSTER_AGILITY, MONSTER_GOLD_MAX, MONSTER_SOULS_MIN, MONSTER_SOULS_SPREAD,
};
use crate::core::dice::roll_dice;
use crate::entity::Stats;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterTemplate {
    /// Classic rogue letter
    pub glyph: char,
    pub name: &'static str,
    pub hp: i32,
    /// Damage dice rolled once at spawn to fix the monster's strength
    pub damage: &'static str,
    pub exp: u32,
    pub speed: f64,
}

pub static MONSTER_TEMPLATES: [MonsterTemplate; 10] = [
    MonsterTemplate { glyph: 'A', name: "Aquator", hp: 25, damage: "0d0", exp: 20, speed: 100.0 },
    MonsterTemplate { glyph: 'B', name: "Bat", hp: 10, damage: "1d3", exp: 2, speed: 180.0 },
    MonsterTemplate { glyph: 'C', name: "Centaur", hp: 32, damage: "3d3", exp: 15, speed: 100.0 },
    MonsterTemplate { glyph: 'D', name: "Dragon", hp: 145, damage: "4d6", exp: 5000, speed: 100.0 },
    MonsterTemplate { glyph: 'E', name: "Emu", hp: 11, damage: "1d3", exp: 2, speed: 120.0 },
    MonsterTemplate { glyph: 'H', name: "Hobgoblin", hp: 15, damage: "1d3", exp: 3, speed: 100.0 },
    MonsterTemplate { glyph: 'O', name: "Orc", hp: 25, damage: "1d6", exp: 5, speed: 100.0 },
    MonsterTemplate { glyph: 'S', name: "Snake", hp: 8, damage: "1d3", exp: 2, speed: 100.0 },
    MonsterTemplate { glyph: 'T', name: "Troll", hp: 75, damage: "4d6", exp: 125, speed: 90.0 },
    MonsterTemplate { glyph: 'Z', name: "Zombie", hp: 21, damage: "1d7", exp: 8, speed: 70.0 },
];

impl MonsterTemplate {
    /// Picks a template uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> &'static MonsterTemplate {
        &MONSTER_TEMPLATES[rng.gen_range(0..MONSTER_TEMPLATES.len())]
    }

    /// Rolls fresh starting stats for a monster of this kind.
    pub fn roll_stats<R: Rng>(&self, rng: &mut R) -> Stats {
        Stats {
            hp: self.hp,
            max_hp: self.hp,
            str: roll_dice(self.damage, rng),
            armor: 0,
            exp: self.exp,
            level: 1,
            gold: rng.gen_range(0..MONSTER_GOLD_MAX),
            souls: MONSTER_SOULS_MIN + rng.gen_range(0..MONSTER_SOULS_SPREAD),
            speed: self.speed,
            agility: MONSTER_AGILITY,
        }
    }
}
