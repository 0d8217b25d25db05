//! Shared constants, configuration, and math.

pub mod config;
pub mod constants;
pub mod dice;
pub mod geometry;

pub use config::SessionConfig;
pub use geometry::{Position, Viewport};
