//! Play-field rendering using a cell buffer, one terminal cell per tile.

use super::{faded_hex_color, hex_color};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rogue_clone::core::constants::{COLOR_FLOOR, COLOR_WALL, TILE_SIZE};
use rogue_clone::core::geometry::Position;
use rogue_clone::entity::Entity;
use rogue_clone::GameSession;

/// Cell in the render buffer.
#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

struct CellBuffer {
    cells: Vec<Vec<Cell>>,
    camera: Position,
}

impl CellBuffer {
    fn new(width: u16, height: u16, camera: Position) -> Self {
        Self {
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
            camera,
        }
    }

    /// Buffer coordinates of a world position, if it is on screen.
    fn locate(&self, pos: Position) -> Option<(usize, usize)> {
        let col = ((pos.x - self.camera.x) / TILE_SIZE).floor();
        let row = ((pos.y - self.camera.y) / TILE_SIZE).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        let width = self.cells.first().map_or(0, Vec::len);
        (row < self.cells.len() && col < width).then_some((col, row))
    }

    /// World position at the centre of a buffer cell.
    fn world_at(&self, col: usize, row: usize) -> Position {
        Position::new(
            self.camera.x + col as f64 * TILE_SIZE + TILE_SIZE / 2.0,
            self.camera.y + row as f64 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }

    /// Draws a glyph, keeping the floor background underneath.
    fn put(&mut self, pos: Position, ch: char, fg: Color, bold: bool) {
        if let Some((col, row)) = self.locate(pos) {
            let cell = &mut self.cells[row][col];
            cell.ch = ch;
            cell.fg = fg;
            cell.bold = bold;
        }
    }
}

/// Render the dungeon, its entities, swing arcs, and damage numbers.
pub fn render_dungeon(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut buffer = CellBuffer::new(area.width, area.height, session.camera());

    // -- Terrain --
    let dungeon = session.dungeon();
    let floor_bg = hex_color(COLOR_FLOOR);
    let wall_fg = hex_color(COLOR_WALL);
    for row in 0..area.height as usize {
        for col in 0..area.width as usize {
            let at = buffer.world_at(col, row);
            if !dungeon.in_bounds(at.x, at.y) {
                continue;
            }
            if dungeon.is_walkable(at.x, at.y) {
                buffer.cells[row][col] = Cell {
                    ch: '.',
                    fg: Color::DarkGray,
                    bg: floor_bg,
                    bold: false,
                };
            } else if touches_floor(session, at) {
                buffer.cells[row][col] = Cell {
                    ch: '#',
                    fg: wall_fg,
                    bg: Color::Reset,
                    bold: false,
                };
            }
        }
    }

    // -- Entities: items and traps under monsters under the player --
    let entities = session.entities();
    for entity in entities.iter().filter(|e| !e.is_monster()) {
        buffer.put(entity.pos, entity.glyph, hex_color(entity.color), false);
    }
    for entity in entities.iter().filter(|e| e.is_monster()) {
        buffer.put(entity.pos, entity.glyph, hex_color(entity.color), true);
        draw_swing(&mut buffer, entity);
    }
    if let Some(player) = session.player() {
        buffer.put(player.pos, player.glyph, hex_color(player.color), true);
        draw_swing(&mut buffer, player);
    }

    // -- Damage numbers --
    for text in session.floating_texts() {
        let color = faded_hex_color(text.color, text.fade());
        for (i, ch) in text.text.chars().enumerate() {
            let at = Position::new(text.x + i as f64 * TILE_SIZE, text.y);
            buffer.put(at, ch, color, true);
        }
    }

    flush(frame, area, &buffer);
}

/// Whether any of the eight neighbouring tiles is walkable.
fn touches_floor(session: &GameSession, at: Position) -> bool {
    let dungeon = session.dungeon();
    (-1..=1).any(|dy| {
        (-1..=1).any(|dx| {
            (dx != 0 || dy != 0)
                && dungeon.is_walkable(
                    at.x + f64::from(dx) * TILE_SIZE,
                    at.y + f64::from(dy) * TILE_SIZE,
                )
        })
    })
}

/// Marks the tile one step along an active swing.
fn draw_swing(buffer: &mut CellBuffer, entity: &Entity) {
    let visual = &entity.attack_visual;
    if !visual.active {
        return;
    }
    let at = entity
        .pos
        .offset(visual.angle.cos() * TILE_SIZE, visual.angle.sin() * TILE_SIZE);
    buffer.put(at, swing_glyph(visual.angle), Color::White, true);
}

/// Slash character closest to the swing direction (screen y grows down).
fn swing_glyph(angle: f64) -> char {
    let octant = (angle / std::f64::consts::FRAC_PI_4).round().rem_euclid(4.0) as u8;
    match octant {
        0 => '-',
        1 => '\\',
        2 => '|',
        _ => '/',
    }
}

fn flush(frame: &mut Frame, area: Rect, buffer: &CellBuffer) {
    for (row_idx, row_data) in buffer.cells.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current = Cell::default();
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            let same_style =
                cell.fg == current.fg && cell.bg == current.bg && cell.bold == current.bold;
            if !same_style && !current_text.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut current_text), style_of(current)));
            }
            current = cell;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, style_of(current)));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn style_of(cell: Cell) -> Style {
    let style = Style::default().fg(cell.fg).bg(cell.bg);
    if cell.bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
