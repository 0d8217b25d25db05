//! Terminal rendering for the dungeon, HUD, and menus.

pub mod dungeon_view;
pub mod hud;
pub mod menu;
pub mod shop;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::Frame;
use rogue_clone::GameSession;

/// Width of the stats/messages sidebar.
const HUD_WIDTH: u16 = 34;

/// Areas of the in-game screen.
#[derive(Debug, Clone, Copy)]
pub struct GameLayout {
    /// Play field, one cell per world tile
    pub field: Rect,
    pub hud: Rect,
}

pub fn game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(HUD_WIDTH)])
        .split(area);
    GameLayout {
        field: chunks[0],
        hud: chunks[1],
    }
}

/// Draws the in-game screen. Returns the play-field area so pointer
/// positions can be mapped into it.
pub fn draw_game(frame: &mut Frame, session: &GameSession, show_help: bool) -> Rect {
    let layout = game_layout(frame.size());
    dungeon_view::render_dungeon(frame, layout.field, session);
    hud::render_hud(frame, layout.hud, session);
    if show_help {
        hud::render_help_overlay(frame, layout.field);
    }
    layout.field
}

/// Parses `#rrggbb`; anything else renders white.
pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex).map_or(Color::White, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Like [`hex_color`], scaled toward black by `fade` in `[0, 1]`.
pub fn faded_hex_color(hex: &str, fade: f64) -> Color {
    let fade = fade.clamp(0.0, 1.0);
    match parse_hex(hex) {
        Some((r, g, b)) => {
            let scale = |c: u8| (f64::from(c) * fade).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        None => Color::White,
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// A rectangle of the given size centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parses_rgb() {
        assert_eq!(hex_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(hex_color("blue"), Color::White);
        assert_eq!(hex_color("#12345"), Color::White);
    }

    #[test]
    fn test_faded_color_scales_channels() {
        assert_eq!(faded_hex_color("#ffffff", 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(faded_hex_color("#ffffff", 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }
}
