//! Runtime configuration for a play session.

use super::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MAX_FRAME_DT, WORLD_HEIGHT, WORLD_WIDTH,
};
use super::geometry::Viewport;

/// Configuration for a single session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// World width in pixels
    pub world_width: f64,

    /// World height in pixels
    pub world_height: f64,

    /// Initial viewport, replaced by every applied input snapshot
    pub viewport: Viewport,

    /// Largest simulation step accepted by `update`
    pub max_frame_dt: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            viewport: Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl SessionConfig {
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Clamps a raw frame delta into `[0, max_frame_dt]`.
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_dt)
    }
}
