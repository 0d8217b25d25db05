//! UI-agnostic input snapshot fed to the session once per frame.

use crate::core::geometry::{Position, Viewport};

/// Everything the simulation reads from the outside world.
///
/// Front-ends build one of these from whatever device events they have and
/// hand it to [`GameSession::apply_input`](super::GameSession::apply_input)
/// before calling `update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer in screen space (pixels from the viewport's top-left)
    pub pointer: Position,
    /// Attack button held
    pub attack: bool,
    pub viewport: Viewport,
}

impl InputSnapshot {
    /// Idle input for the given viewport.
    pub fn idle(viewport: Viewport) -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            pointer: Position::default(),
            attack: false,
            viewport,
        }
    }

    /// Unit movement vector; zero when nothing (or only opposing keys) is held.
    pub fn direction(&self) -> (f64, f64) {
        let mut dx: f64 = 0.0;
        let mut dy: f64 = 0.0;
        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            return (0.0, 0.0);
        }
        (dx / len, dy / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> InputSnapshot {
        InputSnapshot::idle(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_no_keys_no_motion() {
        assert_eq!(idle().direction(), (0.0, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputSnapshot {
            left: true,
            right: true,
            ..idle()
        };
        assert_eq!(input.direction(), (0.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = InputSnapshot {
            up: true,
            right: true,
            ..idle()
        };
        let (dx, dy) = input.direction();
        assert!((dx - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((dy + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }
}
