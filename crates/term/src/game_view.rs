//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BOARD_SIZE;

const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const EMPTY_BG: Rgb = Rgb::new(90, 84, 78);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Spacing between tiles (and between tiles and the border).
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal fonts and fits
        // five-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, gap: u16) -> Self {
        Self { cell_w, cell_h, gap }
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.cell_w + (n + 1) * self.gap;
        let inner_h = n * self.cell_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board_style = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_style);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let (x, y) = self.cell_origin(start_x, start_y, row, col);
                let empty = CellStyle::new(EMPTY_BG, EMPTY_BG);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', empty);
            }
        }

        for tile in &snap.tiles {
            self.draw_tile(fb, start_x, start_y, tile);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.is_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of board cell (row, col).
    pub fn cell_origin(&self, start_x: u16, start_y: u16, row: u8, col: u8) -> (u16, u16) {
        let x = start_x + 1 + self.gap + (col as u16) * (self.cell_w + self.gap);
        let y = start_y + 1 + self.gap + (row as u16) * (self.cell_h + self.gap);
        (x, y)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, tile: &TileSnapshot) {
        let (bg, fg) = tile_colors(tile.value);
        // Merged tiles are underlined, fresh spawns drawn dim for one step.
        let mut style = CellStyle::new(fg, bg).bold();
        if tile.just_merged {
            style = style.underline();
        }
        if tile.is_new {
            style = CellStyle::new(fg, bg).dim();
        }

        let (x, y) = self.cell_origin(start_x, start_y, tile.row, tile.col);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle { underline: false, ..style });
        fb.put_u32_centered(x, y + self.cell_h / 2, self.cell_w, tile.value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MOVES", snap.moves),
            ("MAX", snap.max_tile),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/hjkl/wasd", "r  new game", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (dy, text) in [(0u16, " GAME OVER "), (1, " r: new game ")] {
            let w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
            fb.put_str(x, mid_y.saturating_add(dy), text, style);
        }
    }
}

/// Background/foreground for a tile value.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    match value {
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), light),
    }
}
