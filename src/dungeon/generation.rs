//! Procedural level layout and room population.

use super::types::{Dungeon, Room, RoomKind};
use crate::core::constants::*;
use crate::core::geometry::Position;
use crate::entity::{EntityStore, ItemKind};
use crate::monster::data::MonsterTemplate;
use rand::Rng;

/// Generates a level into `store`.
///
/// The world is split into a 3x3 grid; each cell holds at most one room.
/// Rooms are linked in scan order (room i to room i+1) by L-shaped corridors
/// and every room is populated as it is created.
pub fn generate_dungeon<R: Rng>(
    width: f64,
    height: f64,
    store: &mut EntityStore,
    rng: &mut R,
) -> Dungeon {
    let mut dungeon = Dungeon::new(width, height);
    let cell_w = width / DUNGEON_GRID_CELLS as f64;
    let cell_h = height / DUNGEON_GRID_CELLS as f64;
    let mut centers = Vec::new();

    for row in 0..DUNGEON_GRID_CELLS {
        for column in 0..DUNGEON_GRID_CELLS {
            if rng.gen::<f64>() >= ROOM_SPAWN_CHANCE {
                continue;
            }
            let Some(room) = roll_room(column, row, cell_w, cell_h, rng) else {
                tracing::debug!(column, row, cell_w, cell_h, "cell too small for a room");
                continue;
            };
            centers.push(room.center());
            dungeon.rooms.push(room);
            populate_room(&room, store, rng);
        }
    }

    for pair in centers.windows(2) {
        dungeon.rooms.extend(corridor_between(pair[0], pair[1]));
    }

    tracing::debug!(
        chambers = centers.len(),
        rectangles = dungeon.rooms.len(),
        entities = store.entities().len(),
        "dungeon generated"
    );
    dungeon
}

/// Rolls a room that fits inside grid cell `(column, row)`.
///
/// Sides fall in `[ROOM_MIN_SIZE, ROOM_MIN_SIZE + cell - ROOM_SIZE_MARGIN)`;
/// cells too small to leave any spread return `None`.
fn roll_room<R: Rng>(
    column: usize,
    row: usize,
    cell_w: f64,
    cell_h: f64,
    rng: &mut R,
) -> Option<Room> {
    let spread_w = cell_w - ROOM_SIZE_MARGIN;
    let spread_h = cell_h - ROOM_SIZE_MARGIN;
    if spread_w <= 0.0 || spread_h <= 0.0 {
        return None;
    }

    let w = rng.gen::<f64>() * spread_w + ROOM_MIN_SIZE;
    let h = rng.gen::<f64>() * spread_h + ROOM_MIN_SIZE;
    if w > cell_w || h > cell_h {
        return None;
    }
    let x = column as f64 * cell_w + rng.gen::<f64>() * (cell_w - w);
    let y = row as f64 * cell_h + rng.gen::<f64>() * (cell_h - h);

    Some(Room::new(x, y, w, h, RoomKind::Chamber { column, row }))
}

/// Horizontal bar at `from.y`, then vertical bar at `to.x`.
pub fn corridor_between(from: Position, to: Position) -> [Room; 2] {
    let half = CORRIDOR_THICKNESS / 2.0;
    let horizontal = Room::new(
        from.x.min(to.x) - half,
        from.y - half,
        (to.x - from.x).abs() + CORRIDOR_THICKNESS,
        CORRIDOR_THICKNESS,
        RoomKind::Corridor,
    );
    let vertical = Room::new(
        to.x - half,
        from.y.min(to.y) - half,
        CORRIDOR_THICKNESS,
        (to.y - from.y).abs() + CORRIDOR_THICKNESS,
        RoomKind::Corridor,
    );
    [horizontal, vertical]
}

fn random_point_in<R: Rng>(room: &Room, rng: &mut R) -> Position {
    Position::new(
        room.x + rng.gen::<f64>() * room.w,
        room.y + rng.gen::<f64>() * room.h,
    )
}

/// Scatters monsters and pickups into a freshly generated room.
pub fn populate_room<R: Rng>(room: &Room, store: &mut EntityStore, rng: &mut R) {
    if rng.gen::<f64>() < MONSTER_SPAWN_CHANCE {
        let count = rng.gen_range(1..=MAX_MONSTERS_PER_ROOM);
        for _ in 0..count {
            let template = MonsterTemplate::random(rng);
            let pos = random_point_in(room, rng);
            let stats = template.roll_stats(rng);
            store.spawn_monster(pos, template.name, template.glyph, stats);
        }
    }

    if rng.gen::<f64>() < GOLD_SPAWN_CHANCE {
        let pos = random_point_in(room, rng);
        let amount = rng.gen_range(GOLD_PILE_MIN..GOLD_PILE_MAX);
        store.spawn_item(pos, ItemKind::Gold { amount });
    }

    if rng.gen::<f64>() < AGILITY_POTION_SPAWN_CHANCE {
        let pos = random_point_in(room, rng);
        store.spawn_item(pos, ItemKind::AgilityPotion);
    }

    if rng.gen::<f64>() < AGILITY_RING_SPAWN_CHANCE {
        let pos = random_point_in(room, rng);
        store.spawn_item(pos, ItemKind::AgilityRing);
    }
}
