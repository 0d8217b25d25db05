//! The per-frame simulation: movement, combat, monster AI, and pickups.
//!
//! [`GameSession::update`] advances one frame and returns a [`TickResult`]
//! describing what happened, so the front-end can react without the game
//! logic depending on any UI types.

use super::events::{TickEvent, TickResult};
use super::feedback::{advance_floating_texts, FloatingText, MessageLog};
use super::input::InputSnapshot;
use crate::combat::{resolve_attack, Attacker, CombatEvent};
use crate::core::config::SessionConfig;
use crate::core::constants::COLOR_DAMAGE_TEXT;
use crate::core::geometry::{camera_offset, screen_to_world, Position};
use crate::dungeon::{generate_dungeon, Dungeon, Room};
use crate::entity::{Entity, EntityKind, EntityStore, ItemKind, Stats};
use crate::meta::{upgrade_bonus, MetaProgress, UpgradeId};
use crate::monster::update_monster;
use rand::Rng;

/// One run through the dungeon.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    level: u32,
    dungeon: Dungeon,
    store: EntityStore,
    floating_texts: Vec<FloatingText>,
    log: MessageLog,
    input: InputSnapshot,
    game_over: bool,
    souls_earned: Option<u32>,
}

impl GameSession {
    /// An empty session. Call [`init_level`](Self::init_level) before
    /// updating it.
    pub fn new(config: SessionConfig) -> Self {
        let dungeon = Dungeon::new(config.world_width, config.world_height);
        Self::from_parts(config, dungeon, EntityStore::new())
    }

    /// A session over a hand-built layout and population.
    pub fn from_parts(config: SessionConfig, dungeon: Dungeon, store: EntityStore) -> Self {
        let input = InputSnapshot::idle(config.viewport);
        Self {
            config,
            level: 1,
            dungeon,
            store,
            floating_texts: Vec::new(),
            log: MessageLog::new(),
            input,
            game_over: false,
            souls_earned: None,
        }
    }

    /// Builds a fresh level and places the player at the centre of the
    /// first room, with starting stats raised by purchased upgrades.
    pub fn init_level<R: Rng>(&mut self, level: u32, meta: &MetaProgress, rng: &mut R) {
        self.level = level;
        self.store.clear();
        self.floating_texts.clear();
        self.game_over = false;
        self.souls_earned = None;

        self.dungeon = generate_dungeon(
            self.config.world_width,
            self.config.world_height,
            &mut self.store,
            rng,
        );

        let stats = starting_stats(meta);
        tracing::info!(
            level,
            rooms = self.dungeon.rooms.len(),
            entities = self.store.entities().len(),
            max_hp = stats.max_hp,
            strength = stats.str,
            agility = stats.agility,
            "level initialised"
        );
        match self.dungeon.start_room().map(Room::center) {
            Some(start) => {
                self.store.spawn_player(start, stats);
            }
            None => tracing::warn!(level, "no chamber generated, player not placed"),
        }

        self.log
            .push(format!("Welcome to Level {} of the Dungeon.", level));
    }

    /// Replaces the input read by subsequent updates.
    pub fn apply_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Does nothing once the run is over or before a player exists.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if self.game_over || !self.store.player().is_some_and(Entity::is_alive) {
            return result;
        }
        let dt = self.config.clamp_dt(dt);
        result.simulated = true;

        // ── 1. Player movement ──────────────────────────────────
        self.move_player(dt);

        // ── 2. Swing visuals ────────────────────────────────────
        let (player, entities) = self.store.split_mut();
        for entity in player.into_iter().chain(entities.iter_mut()) {
            entity.attack_visual.decay(dt);
        }

        // ── 3. Floating text ────────────────────────────────────
        advance_floating_texts(&mut self.floating_texts, dt);

        // ── 4. Player attack ────────────────────────────────────
        let events = self.player_attack(dt, rng);
        self.record_combat(events, &mut result);

        // ── 5. Monsters and pickups, newest entity first ────────
        for index in (0..self.store.entities().len()).rev() {
            if self.game_over {
                break;
            }
            let Some(kind) = self.store.entities().get(index).map(|e| e.kind) else {
                continue;
            };
            match kind {
                EntityKind::Monster => {
                    let events = update_monster(&mut self.store, index, &self.dungeon, dt, rng);
                    self.record_combat(events, &mut result);
                }
                EntityKind::Item(item) => self.try_pick_up(index, item, &mut result),
                EntityKind::Player | EntityKind::Trap => {}
            }
        }

        result
    }

    fn move_player(&mut self, dt: f64) {
        let (dx, dy) = self.input.direction();
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let Some(player) = self.store.player_mut() else {
            return;
        };
        let speed = player.stats.as_ref().map_or(0.0, Stats::effective_speed);
        self.dungeon
            .slide(&mut player.pos, dx * speed * dt, dy * speed * dt);
    }

    fn player_attack<R: Rng>(&mut self, dt: f64, rng: &mut R) -> Vec<CombatEvent> {
        let camera = self.camera();
        let Some(player) = self.store.player_mut() else {
            return Vec::new();
        };
        if player.cooldown > 0.0 {
            player.cooldown -= dt;
        }
        if !self.input.attack || player.cooldown > 0.0 {
            return Vec::new();
        }

        let multiplier = player.stats.as_ref().map_or(1.0, Stats::agility_multiplier);
        player.cooldown = player.max_cooldown / multiplier;

        let aim = screen_to_world(self.input.pointer, camera);
        resolve_attack(&mut self.store, Attacker::Player, aim, rng)
    }

    fn try_pick_up(&mut self, index: usize, item: ItemKind, result: &mut TickResult) {
        let (Some(player), entities) = self.store.split_mut() else {
            return;
        };
        if !entities.get(index).is_some_and(|e| player.touches(e)) {
            return;
        }
        let Some(stats) = player.stats.as_mut() else {
            return;
        };

        let picked = entities.remove(index);
        let message = match item {
            ItemKind::Gold { amount } => {
                stats.gold += amount;
                format!("Picked up {} gold.", amount)
            }
            ItemKind::AgilityPotion => {
                stats.agility += item.agility_bonus();
                format!("Drank Agility Potion! (+{} Agility)", item.agility_bonus())
            }
            ItemKind::AgilityRing => {
                stats.agility += item.agility_bonus();
                format!("Equipped Ring of Agility! (+{} Agility)", item.agility_bonus())
            }
        };
        tracing::debug!(id = picked.id.0, item = item.name(), "item picked up");

        self.log.push(message.clone());
        result.events.push(TickEvent::ItemPickedUp { item, message });
    }

    /// Turns combat events into log lines, damage numbers, and tick events.
    fn record_combat(&mut self, events: Vec<CombatEvent>, result: &mut TickResult) {
        for event in events {
            let tick_event = match event {
                CombatEvent::MonsterWoke { id, name } => TickEvent::MonsterWoke {
                    id,
                    message: format!("{} wakes up!", name),
                },
                CombatEvent::PlayerHit {
                    target,
                    target_name,
                    damage,
                    at,
                } => {
                    self.spawn_damage_text(at, damage);
                    TickEvent::PlayerAttack {
                        target,
                        damage,
                        message: format!("You hit {} for {} damage.", target_name, damage),
                    }
                }
                CombatEvent::MonsterHit {
                    attacker,
                    attacker_name,
                    damage,
                    at,
                } => {
                    self.spawn_damage_text(at, damage);
                    TickEvent::MonsterAttack {
                        attacker,
                        damage,
                        message: format!("{} hits you for {} damage.", attacker_name, damage),
                    }
                }
                CombatEvent::MonsterSlain {
                    id,
                    name,
                    exp,
                    souls,
                } => TickEvent::MonsterDefeated {
                    id,
                    exp,
                    souls,
                    message: format!("{} died.", name),
                },
                CombatEvent::LeveledUp { new_level } => TickEvent::LeveledUp {
                    new_level,
                    message: "Level Up!".to_string(),
                },
                CombatEvent::PlayerSlain { souls } => {
                    self.game_over = true;
                    self.souls_earned = Some(souls);
                    TickEvent::PlayerDied {
                        souls_earned: souls,
                        message: "You died!".to_string(),
                    }
                }
            };
            self.log.push(tick_event.message().to_string());
            result.events.push(tick_event);
        }
    }

    fn spawn_damage_text(&mut self, at: Position, damage: i32) {
        self.floating_texts.push(FloatingText::rising(
            at,
            damage.to_string(),
            COLOR_DAMAGE_TEXT,
        ));
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Whether a point lies inside any room or corridor.
    pub fn is_valid_move(&self, x: f64, y: f64) -> bool {
        self.dungeon.is_walkable(x, y)
    }

    /// Top-left of the visible area, clamped to the world.
    pub fn camera(&self) -> Position {
        let focus = self.store.player().map(|p| p.pos).unwrap_or_default();
        camera_offset(
            focus,
            self.input.viewport,
            self.config.world_width,
            self.config.world_height,
        )
    }

    pub fn player(&self) -> Option<&Entity> {
        self.store.player()
    }

    pub fn entities(&self) -> &[Entity] {
        self.store.entities()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.dungeon.rooms
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn floating_texts(&self) -> &[FloatingText] {
        &self.floating_texts
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Souls collected during the run, set once the player dies.
    pub fn souls_earned(&self) -> Option<u32> {
        self.souls_earned
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

/// Base player stats plus purchased upgrade bonuses, at full health.
pub fn starting_stats(meta: &MetaProgress) -> Stats {
    let mut stats = Stats::base_player();
    stats.max_hp += upgrade_bonus(meta, UpgradeId::MaxHp.id());
    stats.str += upgrade_bonus(meta, UpgradeId::BaseDamage.id());
    stats.agility += upgrade_bonus(meta, UpgradeId::Agility.id());
    stats.hp = stats.max_hp;
    stats
}
