//! Continuous world-space geometry shared by the simulation and the renderer.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point in world (or screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle in radians of the direction from `self` toward `other`.
    pub fn angle_to(&self, other: Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Size of the visible window in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub w: f64,
    pub h: f64,
}

impl Viewport {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Top-left corner of a player-centred viewport, clamped to the world.
///
/// When the viewport is larger than the world along an axis the offset on
/// that axis is 0. Both the attack aim conversion and the renderer must use
/// this function so the pointer lines up with what is drawn.
pub fn camera_offset(player: Position, viewport: Viewport, world_w: f64, world_h: f64) -> Position {
    let x = (player.x - viewport.w / 2.0).min(world_w - viewport.w).max(0.0);
    let y = (player.y - viewport.h / 2.0).min(world_h - viewport.h).max(0.0);
    Position::new(x, y)
}

/// Converts a screen-space pointer into world space.
pub fn screen_to_world(pointer: Position, camera: Position) -> Position {
    Position::new(pointer.x + camera.x, pointer.y + camera.y)
}

/// Absolute difference between two angles, normalized into `[0, PI]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % (2.0 * PI);
    if diff > PI {
        2.0 * PI - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_angle() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert!((a.angle_to(Position::new(0.0, 10.0)) - PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_camera_centres_on_player() {
        let cam = camera_offset(
            Position::new(1000.0, 400.0),
            Viewport::new(800.0, 600.0),
            2560.0,
            768.0,
        );
        assert_eq!(cam, Position::new(600.0, 100.0));
    }

    #[test]
    fn test_camera_clamps_to_world_edges() {
        let viewport = Viewport::new(800.0, 600.0);
        let top_left = camera_offset(Position::new(10.0, 10.0), viewport, 2560.0, 768.0);
        assert_eq!(top_left, Position::new(0.0, 0.0));

        let bottom_right = camera_offset(Position::new(2550.0, 760.0), viewport, 2560.0, 768.0);
        assert_eq!(bottom_right, Position::new(1760.0, 168.0));
    }

    #[test]
    fn test_camera_zero_when_viewport_exceeds_world() {
        let cam = camera_offset(
            Position::new(500.0, 300.0),
            Viewport::new(4000.0, 2000.0),
            2560.0,
            768.0,
        );
        assert_eq!(cam, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_angle_difference_wraps() {
        assert!((angle_difference(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-9);
        assert!((angle_difference(0.0, PI) - PI).abs() < 1e-9);
        assert_eq!(angle_difference(0.5, 0.5), 0.0);
    }
}
