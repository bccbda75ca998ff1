//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World pixels are scaled down to character cells. Terminal glyphs are about
//! twice as tall as they are wide, so the default scale is 10 px per column and
//! 20 px per row, which turns the 400x600 world into a 40x30 playfield.

use crate::core::{GameSnapshot, WorldSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GamePhase;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SKY: Rgb = Rgb::new(0, 150, 255);
const PIPE: Rgb = Rgb::new(0, 255, 0);
const BIRD: Rgb = Rgb::new(255, 255, 0);
const DEAD_BIRD: Rgb = Rgb::new(255, 120, 0);
const GROUND: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Rectangle in cell coordinates, relative to the playfield origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// World pixels per terminal column.
    px_per_col: u16,
    /// World pixels per terminal row.
    px_per_row: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            px_per_col: 10,
            px_per_row: 20,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: u16, px_per_row: u16) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
        }
    }

    /// Playfield size in cells for the given world.
    pub fn field_size(&self, world: &WorldSnapshot) -> (u16, u16) {
        (
            div_ceil(world.screen_width, self.px_per_col),
            div_ceil(world.screen_height, self.px_per_row),
        )
    }

    /// Smallest viewport that fits the playfield and its border.
    pub fn required_viewport(&self, world: &WorldSnapshot) -> Viewport {
        let (cols, rows) = self.field_size(world);
        Viewport::new(cols.saturating_add(2), rows.saturating_add(2))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let need = self.required_viewport(&snap.world);
        if viewport.width < need.width || viewport.height < need.height {
            self.draw_too_small(fb, viewport, need);
            return;
        }

        let (cols, rows) = self.field_size(&snap.world);
        let start_x = (viewport.width - need.width) / 2;
        let start_y = (viewport.height - need.height) / 2;
        let origin = (start_x + 1, start_y + 1);

        draw_border(
            fb,
            start_x,
            start_y,
            need.width,
            need.height,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        // Sky.
        fb.fill_rect(origin.0, origin.1, cols, rows, ' ', CellStyle::new(WHITE, SKY));

        // Ground.
        let world = &snap.world;
        let ground_y = world.screen_height - world.ground_height;
        if let Some(r) = self.to_cells(
            world,
            0.0,
            ground_y as f32,
            world.screen_width as f32,
            world.ground_height as f32,
        ) {
            let style = CellStyle::new(Rgb::new(60, 60, 60), GROUND);
            fill(fb, origin, r, '░', style);
        }

        // Pipes: top segment down to the gap, bottom segment from the gap to the ground.
        let pipe_style = CellStyle::new(PIPE, SKY);
        let pipe_w = world.pipe_width as f32;
        for pipe in &snap.pipes {
            let top_h = pipe.gap_top as f32;
            if let Some(r) = self.to_cells(world, pipe.x, 0.0, pipe_w, top_h) {
                fill(fb, origin, r, '█', pipe_style);
            }
            let bottom_y = (pipe.gap_top + world.pipe_gap) as f32;
            let bottom_h = ground_y as f32 - bottom_y;
            if let Some(r) = self.to_cells(world, pipe.x, bottom_y, pipe_w, bottom_h) {
                fill(fb, origin, r, '█', pipe_style);
            }
        }

        // Bird.
        let bird = &snap.bird;
        if let Some(r) = self.to_cells(world, bird.x, bird.y, bird.width, bird.height) {
            let fg = if bird.alive { BIRD } else { DEAD_BIRD };
            fill(fb, origin, r, '█', CellStyle::new(fg, SKY).bold());
        }

        // Score, centred near the top of the playfield.
        let center_x = origin.0 + cols / 2;
        let text = CellStyle::new(WHITE, SKY).bold();
        let score_y = origin.1 + self.row_of(50);
        let digits = count_digits(snap.score);
        fb.put_u32(center_x.saturating_sub(digits / 2), score_y, snap.score, text);

        // Overlays.
        let mid_y = origin.1 + self.row_of(world.screen_height / 2);
        let below_y = origin.1 + self.row_of(world.screen_height / 2 + 50);
        match snap.phase {
            GamePhase::NotStarted => {
                fb.put_str_centered(center_x, mid_y, "Press SPACE to start", text);
            }
            GamePhase::GameOver => {
                fb.put_str_centered(center_x, mid_y, "Game Over", text);
                fb.put_str_centered(center_x, below_y, "Press SPACE to restart", text);
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn row_of(&self, world_y: i32) -> u16 {
        (world_y.max(0) / self.px_per_row as i32) as u16
    }

    /// Map a world-space rectangle to covered cells, clipped to the playfield.
    ///
    /// Any partially covered cell counts as covered.
    fn to_cells(&self, world: &WorldSnapshot, x: f32, y: f32, w: f32, h: f32) -> Option<CellRect> {
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        let (cols, rows) = self.field_size(world);
        let pc = self.px_per_col as f32;
        let pr = self.px_per_row as f32;

        let x0 = (x / pc).floor().max(0.0);
        let y0 = (y / pr).floor().max(0.0);
        let x1 = ((x + w) / pc).ceil().min(cols as f32);
        let y1 = ((y + h) / pr).ceil().min(rows as f32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(CellRect {
            x: x0 as u16,
            y: y0 as u16,
            w: (x1 - x0) as u16,
            h: (y1 - y0) as u16,
        })
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need: Viewport) {
        let style = CellStyle::default().bold();
        let mid_x = viewport.width / 2;
        let mid_y = viewport.height / 2;
        fb.put_str_centered(mid_x, mid_y.saturating_sub(1), "Terminal too small", style);

        let mut line = [0u8; 24];
        let msg = format_need(&mut line, need);
        fb.put_str_centered(mid_x, mid_y, msg, CellStyle::default().dim());
    }
}

fn fill(fb: &mut FrameBuffer, origin: (u16, u16), r: CellRect, ch: char, style: CellStyle) {
    fb.fill_rect(origin.0 + r.x, origin.1 + r.y, r.w, r.h, ch, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn div_ceil(value: i32, by: u16) -> u16 {
    let by = by as i32;
    ((value.max(0) + by - 1) / by).min(u16::MAX as i32) as u16
}

fn count_digits(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Write "need WxH" into `buf` without allocating.
fn format_need(buf: &mut [u8; 24], need: Viewport) -> &str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    // The longest output ("need 65535x65535") fits the buffer.
    let _ = write!(cursor, "need {}x{}", need.width, need.height);
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BirdSnapshot, PipeSnapshot};

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            bird: BirdSnapshot {
                x: 60.0,
                y: 300.0,
                width: 40.0,
                height: 30.0,
                velocity: 0.0,
                alive: true,
            },
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_field_size_default_scale() {
        let view = GameView::default();
        assert_eq!(view.field_size(&WorldSnapshot::default()), (40, 30));
        assert_eq!(
            view.required_viewport(&WorldSnapshot::default()),
            Viewport::new(42, 32)
        );
    }

    #[test]
    fn test_to_cells_covers_partial_cells() {
        let view = GameView::default();
        let world = WorldSnapshot::default();
        // Bird: x 60..100 -> cols 6..10, y 300..330 -> rows 15..17.
        assert_eq!(
            view.to_cells(&world, 60.0, 300.0, 40.0, 30.0),
            Some(CellRect { x: 6, y: 15, w: 4, h: 2 })
        );
    }

    #[test]
    fn test_to_cells_clips_offscreen() {
        let view = GameView::default();
        let world = WorldSnapshot::default();
        assert_eq!(view.to_cells(&world, -100.0, 0.0, 70.0, 100.0), None);
        assert_eq!(view.to_cells(&world, 400.0, 0.0, 70.0, 100.0), None);
        assert_eq!(
            view.to_cells(&world, -35.0, 0.0, 70.0, 100.0),
            Some(CellRect { x: 0, y: 0, w: 4, h: 5 })
        );
    }

    #[test]
    fn test_render_bird_cell() {
        let view = GameView::default();
        let fb = view.render(&snapshot(), Viewport::new(42, 32));
        // Playfield origin is (1, 1).
        let cell = fb.get(1 + 6, 1 + 15).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, BIRD);
    }

    #[test]
    fn test_render_pipe_segments_leave_gap() {
        let view = GameView::default();
        let mut snap = snapshot();
        snap.pipes.push(PipeSnapshot {
            x: 200.0,
            gap_top: 200,
            passed: false,
        });
        let fb = view.render(&snap, Viewport::new(42, 32));

        // Column 20 is inside the pipe. Rows 0..10 top segment, 10..18 gap, 18..25 bottom.
        let col = 1 + 20;
        assert_eq!(fb.get(col, 1 + 9).unwrap().ch, '█');
        assert_eq!(fb.get(col, 1 + 10).unwrap().ch, ' ');
        assert_eq!(fb.get(col, 1 + 17).unwrap().ch, ' ');
        assert_eq!(fb.get(col, 1 + 18).unwrap().ch, '█');
        assert_eq!(fb.get(col, 1 + 24).unwrap().ch, '█');
        // Ground below the pipe.
        assert_eq!(fb.get(col, 1 + 25).unwrap().ch, '░');
    }

    #[test]
    fn test_render_too_small() {
        let view = GameView::default();
        let fb = view.render(&snapshot(), Viewport::new(30, 10));
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(all.contains("Terminal too small"));
        assert!(all.contains("need 42x32"));

        // The size hint sits under the headline, dimmed.
        let hint = fb.get(10, 5).unwrap();
        assert_eq!(hint.ch, 'n');
        assert!(hint.style.dim);
        assert!(!fb.get(6, 4).unwrap().style.dim);
    }

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(u32::MAX), 10);
    }
}
