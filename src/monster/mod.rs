//! Monster templates and behaviour.

pub mod ai;
pub mod data;

pub use ai::update_monster;
pub use data::{MonsterTemplate, MONSTER_TEMPLATES};
