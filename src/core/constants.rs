// World
pub const TILE_SIZE: f64 = 32.0;
pub const WORLD_COLUMNS: u16 = 80;
pub const WORLD_ROWS: u16 = 24;
pub const WORLD_WIDTH: f64 = WORLD_COLUMNS as f64 * TILE_SIZE;
pub const WORLD_HEIGHT: f64 = WORLD_ROWS as f64 * TILE_SIZE;
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

// Frame stepping: larger steps tunnel through thin corridors
pub const MAX_FRAME_DT: f64 = 0.1;

// Dungeon layout (3x3 grid of cells, at most one room per cell)
pub const DUNGEON_GRID_CELLS: usize = 3;
pub const ROOM_SPAWN_CHANCE: f64 = 0.9;
pub const ROOM_MIN_SIZE: f64 = 150.0;
pub const ROOM_SIZE_MARGIN: f64 = 200.0;
pub const CORRIDOR_THICKNESS: f64 = TILE_SIZE * 2.0;

// Room population
pub const MONSTER_SPAWN_CHANCE: f64 = 0.6;
pub const MAX_MONSTERS_PER_ROOM: u32 = 2;
pub const GOLD_SPAWN_CHANCE: f64 = 0.4;
pub const GOLD_PILE_MIN: u32 = 10;
pub const GOLD_PILE_MAX: u32 = 60;
pub const AGILITY_POTION_SPAWN_CHANCE: f64 = 0.1;
pub const AGILITY_RING_SPAWN_CHANCE: f64 = 0.05;
pub const MONSTER_GOLD_MAX: u32 = 10;
pub const MONSTER_SOULS_MIN: u32 = 1;
pub const MONSTER_SOULS_SPREAD: u32 = 5;
pub const MONSTER_AGILITY: i32 = 10;

// Entity radii
pub const ACTOR_SIZE: f64 = TILE_SIZE * 0.8;
pub const GOLD_SIZE: f64 = TILE_SIZE * 0.5;
pub const POTION_SIZE: f64 = TILE_SIZE * 0.4;
pub const RING_SIZE: f64 = TILE_SIZE * 0.3;
pub const TRAP_SIZE: f64 = TILE_SIZE * 0.5;

// Combat
pub const ATTACK_RANGE: f64 = TILE_SIZE * 2.5;
pub const ATTACK_ARC: f64 = 1.0;
pub const ATTACK_DURATION: f64 = 0.2;
pub const PLAYER_ATTACK_COOLDOWN: f64 = 0.5;
pub const MONSTER_ATTACK_COOLDOWN: f64 = 1.0;
pub const DAMAGE_STR_FACTOR: f64 = 0.2;
pub const DAMAGE_SPREAD: f64 = 2.0;
pub const DAMAGE_FLOOR: f64 = 1.0;

// Agility scales move speed and attack rate by (1 + agility / AGILITY_DIVISOR)
pub const AGILITY_DIVISOR: f64 = 50.0;

// Monster AI
pub const MONSTER_WAKE_RANGE: f64 = TILE_SIZE * 8.0;
pub const MONSTER_ATTACK_REACH: f64 = TILE_SIZE * 1.5;

// Leveling: level up once exp exceeds level * EXP_PER_LEVEL
pub const EXP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_MAX_HP: i32 = 5;
pub const LEVEL_UP_STR: i32 = 1;

// Base player stats
pub const BASE_PLAYER_HP: i32 = 12;
pub const BASE_PLAYER_STR: i32 = 16;
pub const BASE_PLAYER_ARMOR: i32 = 4;
pub const BASE_PLAYER_SPEED: f64 = 150.0;
pub const BASE_PLAYER_AGILITY: i32 = 12;

// Feedback
pub const MESSAGE_LOG_CAPACITY: usize = 5;
pub const FLOATING_TEXT_LIFE: f64 = 1.0;
pub const FLOATING_TEXT_RISE_SPEED: f64 = 20.0;

// Colours (cosmetic only, never used for logic)
pub const COLOR_WALL: &str = "#404040";
pub const COLOR_FLOOR: &str = "#1a1a1a";
pub const COLOR_PLAYER: &str = "#3b82f6";
pub const COLOR_MONSTER: &str = "#ef4444";
pub const COLOR_GOLD: &str = "#eab308";
pub const COLOR_TRAP: &str = "#f97316";
pub const COLOR_POTION_AGILITY: &str = "#22c55e";
pub const COLOR_RING_AGILITY: &str = "#06b6d4";
pub const COLOR_DAMAGE_TEXT: &str = "#ffffff";

// Meta-progression
pub const UPGRADE_COST: u32 = 50;
pub const UPGRADE_MAX_LEVEL: u32 = 10;
/// Directory under the home directory holding saves and logs
pub const DATA_DIR_NAME: &str = ".rogue_clone";
pub const META_SAVE_FILE: &str = "meta.json";
pub const LOG_FILE: &str = "rogue-clone.log";
