//! Rogue Clone - real-time dungeon crawler core
//!
//! This crate exposes the simulation (dungeon generation, entities, combat,
//! monster AI, meta-progression) independent of any front-end. The
//! `rogue-clone` binary drives it from a terminal.

pub mod combat;
pub mod core;
pub mod dungeon;
pub mod engine;
pub mod entity;
pub mod meta;
pub mod monster;
pub mod utils;

pub use crate::core::{Position, SessionConfig, Viewport};
pub use engine::{GameSession, InputSnapshot, TickEvent, TickResult};
pub use meta::MetaProgress;
