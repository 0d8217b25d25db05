//! Title and game-over screens.

use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rogue_clone::MetaProgress;

fn key_hint(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", action)),
    ])
}

pub fn render_title(frame: &mut Frame, meta: &MetaProgress) {
    let area = centered_rect(48, 14, frame.size());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "R O G U E",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "a real-time descent",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(format!("Souls banked: {}", meta.souls)),
        Line::from(""),
        key_hint("[Enter]", "Enter the dungeon"),
        key_hint("[S]", "Soul Altar"),
        key_hint("[Q]", "Quit"),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub dungeon_level: u32,
    pub player_level: u32,
    pub gold: u32,
    pub souls_earned: u32,
}

pub fn render_game_over(frame: &mut Frame, summary: &RunSummary, meta: &MetaProgress) {
    let area = centered_rect(48, 15, frame.size());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "You died!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Fell on dungeon level {} at level {}",
            summary.dungeon_level, summary.player_level
        )),
        Line::from(format!("Gold carried: {}", summary.gold)),
        Line::from(vec![
            Span::raw("Souls earned: "),
            Span::styled(
                summary.souls_earned.to_string(),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(format!("  (banked: {})", meta.souls)),
        ]),
        Line::from(""),
        key_hint("[Enter]", "Try again"),
        key_hint("[S]", "Soul Altar"),
        key_hint("[Q]", "Title"),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(panel, area);
}
