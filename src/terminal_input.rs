//! Turns crossterm key and mouse events into an [`InputSnapshot`].
//!
//! Most terminals only report key presses, never releases, so a pressed
//! direction stays held for a short window that key-repeat keeps refreshing.
//! Terminals that do report releases clear the key immediately.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rogue_clone::core::constants::TILE_SIZE;
use rogue_clone::{InputSnapshot, Position, Viewport};

/// Seconds a key stays held after its last press or repeat.
const KEY_HOLD_SECONDS: f64 = 0.6;

/// Seconds a Space press keeps the attack button down.
const ATTACK_HOLD_SECONDS: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    up: f64,
    down: f64,
    left: f64,
    right: f64,
    attack: f64,
}

impl HeldKeys {
    fn slot(&mut self, code: KeyCode) -> Option<(&mut f64, f64)> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some((&mut self.up, KEY_HOLD_SECONDS))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some((&mut self.down, KEY_HOLD_SECONDS))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some((&mut self.left, KEY_HOLD_SECONDS))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some((&mut self.right, KEY_HOLD_SECONDS))
            }
            KeyCode::Char(' ') => Some((&mut self.attack, ATTACK_HOLD_SECONDS)),
            _ => None,
        }
    }

    fn decay(&mut self, dt: f64) {
        for timer in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.attack,
        ] {
            *timer = (*timer - dt).max(0.0);
        }
    }
}

/// Device state accumulated between frames.
#[derive(Debug, Clone, Default)]
pub struct TerminalInput {
    held: HeldKeys,
    mouse_down: bool,
    /// Last pointer cell (column, row) in terminal coordinates
    pointer_cell: (u16, u16),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key drives the game (movement or attack).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some((timer, hold)) = self.held.slot(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => *timer = hold,
            KeyEventKind::Release => *timer = 0.0,
        }
        true
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.pointer_cell = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.mouse_down = true;
            }
            MouseEventKind::Up(MouseButton::Left) => self.mouse_down = false,
            _ => {}
        }
    }

    /// Ages key holds by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.held.decay(dt);
    }

    /// Drops every held key and button, e.g. when pausing.
    pub fn release_all(&mut self) {
        self.held = HeldKeys::default();
        self.mouse_down = false;
    }

    /// Snapshot for a play field drawn in `field`, one cell per tile.
    pub fn snapshot(&self, field: Rect) -> InputSnapshot {
        InputSnapshot {
            up: self.held.up > 0.0,
            down: self.held.down > 0.0,
            left: self.held.left > 0.0,
            right: self.held.right > 0.0,
            pointer: cell_to_screen(self.pointer_cell, field),
            attack: self.mouse_down || self.held.attack > 0.0,
            viewport: field_viewport(field),
        }
    }
}

/// Pixel size of a play field drawn one cell per tile.
pub fn field_viewport(field: Rect) -> Viewport {
    Viewport::new(
        f64::from(field.width) * TILE_SIZE,
        f64::from(field.height) * TILE_SIZE,
    )
}

/// Centre of a terminal cell in screen pixels relative to the field.
fn cell_to_screen((column, row): (u16, u16), field: Rect) -> Position {
    let column = column.saturating_sub(field.x);
    let row = row.saturating_sub(field.y);
    Position::new(
        f64::from(column) * TILE_SIZE + TILE_SIZE / 2.0,
        f64::from(row) * TILE_SIZE + TILE_SIZE / 2.0,
    )
}
