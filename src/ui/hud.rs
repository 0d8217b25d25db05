//! Sidebar with player stats and the message log, plus the help overlay.

use super::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use rogue_clone::core::constants::EXP_PER_LEVEL;
use rogue_clone::GameSession;

pub fn render_hud(frame: &mut Frame, area: Rect, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    render_health(frame, chunks[0], session);
    render_stats(frame, chunks[1], session);
    render_messages(frame, chunks[2], session);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[H]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Abandon run"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, chunks[3]);
}

fn render_health(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (hp, max_hp) = session
        .player()
        .and_then(|p| p.stats.as_ref())
        .map_or((0, 0), |s| (s.hp.max(0), s.max_hp.max(1)));
    let ratio = f64::from(hp) / f64::from(max_hp.max(1));
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" HP "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", hp, max_hp));
    frame.render_widget(gauge, area);
}

fn render_stats(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Dungeon Level {} ", session.level()));

    let lines = match session.player().and_then(|p| p.stats.as_ref()) {
        Some(stats) => vec![
            stat_line("Level", stats.level.to_string()),
            stat_line(
                "Exp",
                format!("{}/{}", stats.exp, stats.level * EXP_PER_LEVEL),
            ),
            stat_line("Str", stats.str.to_string()),
            stat_line("Armor", stats.armor.to_string()),
            stat_line("Agility", stats.agility.to_string()),
            stat_line("Speed", format!("{:.0}", stats.effective_speed())),
            stat_line("Gold", stats.gold.to_string()),
            stat_line("Souls", stats.souls.to_string()),
        ],
        None => vec![Line::from("No adventurer.")],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn render_messages(frame: &mut Frame, area: Rect, session: &GameSession) {
    let messages = session.messages();
    let newest = messages.len().saturating_sub(1);
    let lines: Vec<Line> = messages
        .iter()
        .enumerate()
        .map(|(i, msg)| {
            let style = if i == newest {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(msg.to_string(), style))
        })
        .collect();

    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: true });
    frame.render_widget(log, area);
}

/// Controls reference drawn over the play field while the game is paused.
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(44, 14, area);
    frame.render_widget(Clear, popup);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let lines = vec![
        Line::from(""),
        Line::from(vec![key("  WASD / Arrows  "), Span::raw("Move")]),
        Line::from(vec![key("  Mouse / Space  "), Span::raw("Attack toward pointer")]),
        Line::from(vec![key("  H              "), Span::raw("Toggle help (paused)")]),
        Line::from(vec![key("  Q / Esc        "), Span::raw("Abandon run")]),
        Line::from(""),
        Line::from("  $ gold  ! agility potion  = ring"),
        Line::from("  Letters are monsters. @ is you."),
        Line::from(""),
        Line::from("  Souls earned are banked when you die"),
        Line::from("  and spent at the Soul Altar."),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (paused) "),
    );
    frame.render_widget(help, popup);
}
