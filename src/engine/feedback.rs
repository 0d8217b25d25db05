//! Player-facing feedback produced by the simulation: floating damage
//! numbers and the short message log.

use crate::core::constants::{FLOATING_TEXT_LIFE, FLOATING_TEXT_RISE_SPEED, MESSAGE_LOG_CAPACITY};
use crate::core::geometry::Position;
use std::collections::VecDeque;

/// A short-lived label drifting away from where it spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: &'static str,
    /// Seconds remaining
    pub life: f64,
    pub max_life: f64,
    pub velocity: Position,
}

impl FloatingText {
    /// A label that rises for one second.
    pub fn rising(at: Position, text: String, color: &'static str) -> Self {
        Self {
            x: at.x,
            y: at.y,
            text,
            color,
            life: FLOATING_TEXT_LIFE,
            max_life: FLOATING_TEXT_LIFE,
            velocity: Position::new(0.0, -FLOATING_TEXT_RISE_SPEED),
        }
    }

    /// Remaining life as a fraction of the starting life.
    pub fn fade(&self) -> f64 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Moves and ages every label, dropping the expired ones.
pub fn advance_floating_texts(texts: &mut Vec<FloatingText>, dt: f64) {
    for text in texts.iter_mut() {
        text.x += text.velocity.x * dt;
        text.y += text.velocity.y * dt;
        text.life -= dt;
    }
    texts.retain(|t| t.life > 0.0);
}

/// Append-only log that keeps the most recent five lines.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    lines: VecDeque<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.lines.len() >= MESSAGE_LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(message.into());
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_last_five() {
        let mut log = MessageLog::new();
        for i in 0..8 {
            log.push(format!("line {}", i));
        }
        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, vec!["line 3", "line 4", "line 5", "line 6", "line 7"]);
        assert_eq!(log.latest(), Some("line 7"));
    }

    #[test]
    fn test_floating_text_rises_and_expires() {
        let mut texts = vec![FloatingText::rising(
            Position::new(10.0, 100.0),
            "5".to_string(),
            "#ffffff",
        )];

        advance_floating_texts(&mut texts, 0.5);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].y, 90.0);
        assert!((texts[0].fade() - 0.5).abs() < 1e-9);

        advance_floating_texts(&mut texts, 0.5);
        assert!(texts.is_empty());
    }
}
