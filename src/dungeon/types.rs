//! Walkable-area data structures.

use crate::core::geometry::Position;
use serde::{Deserialize, Serialize};

/// Whether a rectangle is a chamber or one leg of a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// A room generated inside grid cell `(column, row)`
    Chamber { column: usize, row: usize },
    /// One bar of an L-shaped corridor
    Corridor,
}

/// Axis-aligned walkable rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub kind: RoomKind,
}

impl Room {
    pub fn new(x: f64, y: f64, w: f64, h: f64, kind: RoomKind) -> Self {
        Self { x, y, w, h, kind }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }

    pub fn is_chamber(&self) -> bool {
        matches!(self.kind, RoomKind::Chamber { .. })
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// One level's layout. The union of `rooms` (chambers and corridors alike)
/// is the walkable floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub width: f64,
    pub height: f64,
    /// Chambers in grid-scan order, followed by corridor legs
    pub rooms: Vec<Room>,
}

impl Dungeon {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            rooms: Vec::new(),
        }
    }

    pub fn chambers(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_chamber())
    }

    pub fn corridors(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| !r.is_chamber())
    }

    /// The first generated chamber, where the player starts.
    pub fn start_room(&self) -> Option<&Room> {
        self.chambers().next()
    }

    pub fn in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width && y <= self.height
    }

    /// A point is walkable when it is inside the world and inside at least
    /// one room or corridor rectangle.
    pub fn is_walkable(&self, x: f64, y: f64) -> bool {
        self.in_bounds(x, y) && self.rooms.iter().any(|r| r.contains(x, y))
    }

    /// Moves `pos` by `(dx, dy)` one axis at a time; each axis only commits
    /// if the resulting point is walkable, so blocked diagonals slide.
    pub fn slide(&self, pos: &mut Position, dx: f64, dy: f64) {
        let new_x = pos.x + dx;
        if self.is_walkable(new_x, pos.y) {
            pos.x = new_x;
        }
        let new_y = pos.y + dy;
        if self.is_walkable(pos.x, new_y) {
            pos.y = new_y;
        }
    }
}
