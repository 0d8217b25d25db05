//! Melee combat resolution.

pub mod logic;
pub mod types;

pub use logic::{grant_kill_rewards, resolve_attack, roll_damage, select_target};
pub use types::{Attacker, CombatEvent};
