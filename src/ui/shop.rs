//! The Soul Altar: spend banked souls on permanent upgrades.

use super::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rogue_clone::meta::{can_afford, upgrade_level, MetaProgress, UPGRADES};

/// Cursor and last purchase outcome.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    pub selected: usize,
    pub status: Option<String>,
}

impl ShopState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % UPGRADES.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + UPGRADES.len() - 1) % UPGRADES.len();
    }

    pub fn selected_id(&self) -> &'static str {
        UPGRADES[self.selected % UPGRADES.len()].id.id()
    }
}

pub fn render_shop(frame: &mut Frame, meta: &MetaProgress, state: &ShopState) {
    let area = centered_rect(64, 20, frame.size());

    let mut lines = vec![
        Line::from(vec![
            Span::raw("  Souls: "),
            Span::styled(
                meta.souls.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (i, upgrade) in UPGRADES.iter().enumerate() {
        let level = upgrade_level(meta, upgrade.id.id());
        let selected = i == state.selected;
        let marker = if selected { "> " } else { "  " };
        let name_style = if !can_afford(meta, upgrade) {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let price = if level >= upgrade.max_level {
            "MAX".to_string()
        } else {
            format!("{} souls", upgrade.cost)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<10}", upgrade.name), name_style),
            Span::raw(format!(" Lv {:>2}/{:<2}  ", level, upgrade.max_level)),
            Span::styled(price, Style::default().fg(Color::Magenta)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", upgrade.description),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    if let Some(status) = &state.status {
        lines.push(Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  [Up/Down]", Style::default().fg(Color::Yellow)),
        Span::raw(" Select  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Buy  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]));

    let shop = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Soul Altar "),
    );
    frame.render_widget(shop, area);
}
