//! Simulation step, input, and player feedback.

pub mod events;
pub mod feedback;
pub mod input;
pub mod session;

pub use events::{TickEvent, TickResult};
pub use feedback::{FloatingText, MessageLog};
pub use input::InputSnapshot;
pub use session::{starting_stats, GameSession};
