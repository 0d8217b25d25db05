//! Entity data model and store.

pub mod store;
pub mod types;

pub use store::EntityStore;
pub use types::{AiState, AttackVisual, Entity, EntityId, EntityKind, ItemKind, Stats};
