//! The mutable collection of everything simulated in a level.

use super::types::{Entity, EntityId, ItemKind, Stats};
use crate::core::geometry::Position;

/// Owns the player and every other entity of one level.
///
/// The player is held apart from the rest so it can be borrowed alongside
/// the monster list. It is never removed during a run, only marked dead.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    player: Option<Entity>,
    entities: Vec<Entity>,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entity. Ids keep counting so they stay unique per session.
    pub fn clear(&mut self) {
        self.player = None;
        self.entities.clear();
    }

    fn allocate_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    pub fn spawn_player(&mut self, pos: Position, stats: Stats) -> EntityId {
        let id = self.allocate_id();
        self.player = Some(Entity::player(id, pos, stats));
        id
    }

    pub fn spawn_monster(
        &mut self,
        pos: Position,
        name: &str,
        glyph: char,
        stats: Stats,
    ) -> EntityId {
        let id = self.allocate_id();
        self.entities.push(Entity::monster(id, pos, name, glyph, stats));
        id
    }

    pub fn spawn_item(&mut self, pos: Position, item: ItemKind) -> EntityId {
        let id = self.allocate_id();
        self.entities.push(Entity::item(id, pos, item));
        id
    }

    pub fn spawn_trap(&mut self, pos: Position) -> EntityId {
        let id = self.allocate_id();
        self.entities.push(Entity::trap(id, pos));
        id
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.player.as_mut()
    }

    /// Every non-player entity, in spawn order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access to the player and the rest at the same time.
    pub fn split_mut(&mut self) -> (Option<&mut Entity>, &mut Vec<Entity>) {
        (self.player.as_mut(), &mut self.entities)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        if let Some(player) = self.player.as_ref().filter(|p| p.id == id) {
            return Some(player);
        }
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    /// Removes a non-player entity.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index))
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_monster())
    }

    pub fn items(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.item_kind().is_some())
    }

    /// Player first, then everything else in spawn order.
    pub fn iter_all(&self) -> impl Iterator<Item = &Entity> {
        self.player.iter().chain(self.entities.iter())
    }

    pub fn len(&self) -> usize {
        self.entities.len() + usize::from(self.player.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
