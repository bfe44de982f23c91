//! Pixel canvas with half-block composition.
//!
//! The world (800x600 by default) is scaled onto a pixel grid two pixels
//! tall per terminal row. Composition turns each pair of vertical pixels
//! into one cell: `'▀'` with the upper pixel as foreground and the lower as
//! background, or a plain space when both match. Text is kept apart from the
//! pixels and overlaid as cells afterwards.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Point, Rect, Rgb, Sprite};

const UPPER_HALF: char = '\u{2580}';

/// Text at or above this nominal size is drawn bold.
pub const BOLD_TEXT_SIZE: u16 = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextRun {
    col: u16,
    row: u16,
    text: String,
    fg: Rgb,
    bold: bool,
}

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    world_w: i32,
    world_h: i32,
    cols: u16,
    rows: u16,
    pixels: Vec<Rgb>,
    texts: Vec<TextRun>,
}

impl PixelCanvas {
    /// A canvas showing a `world_w` x `world_h` world on `cols` x `rows`
    /// terminal cells.
    pub fn new(world_w: i32, world_h: i32, cols: u16, rows: u16) -> Self {
        let mut canvas = Self {
            world_w: world_w.max(1),
            world_h: world_h.max(1),
            cols: 0,
            rows: 0,
            pixels: Vec::new(),
            texts: Vec::new(),
        };
        canvas.resize(cols, rows);
        canvas
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn px_w(&self) -> i64 {
        self.cols as i64
    }

    fn px_h(&self) -> i64 {
        self.rows as i64 * 2
    }

    /// Change the cell grid. Drawn content is discarded.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        let len = (self.px_w() * self.px_h()) as usize;
        self.pixels.clear();
        self.pixels.resize(len, Rgb::default());
        self.texts.clear();
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    /// Pixel at canvas coordinates, if inside.
    pub fn pixel(&self, px: i64, py: i64) -> Option<Rgb> {
        if px < 0 || py < 0 || px >= self.px_w() || py >= self.px_h() {
            return None;
        }
        Some(self.pixels[(py * self.px_w() + px) as usize])
    }

    fn set(&mut self, px: i64, py: i64, color: Rgb) {
        if px < 0 || py < 0 || px >= self.px_w() || py >= self.px_h() {
            return;
        }
        let i = (py * self.px_w() + px) as usize;
        self.pixels[i] = color;
    }

    fn to_px_x(&self, x: i32) -> i64 {
        (x as i64 * self.px_w()).div_euclid(self.world_w as i64)
    }

    fn to_px_y(&self, y: i32) -> i64 {
        (y as i64 * self.px_h()).div_euclid(self.world_h as i64)
    }

    /// World x of the center of canvas column `px`, times two.
    fn world_x2(&self, px: i64) -> i64 {
        ((2 * px + 1) * self.world_w as i64) / self.px_w()
    }

    fn world_y2(&self, py: i64) -> i64 {
        ((2 * py + 1) * self.world_h as i64) / self.px_h()
    }

    /// `from_px..to_px`, widened to one pixel when empty.
    fn span(from_px: i64, to_px: i64) -> std::ops::Range<i64> {
        from_px..to_px.max(from_px + 1)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let xs = Self::span(self.to_px_x(rect.x), self.to_px_x(rect.x + rect.w));
        let ys = Self::span(self.to_px_y(rect.y), self.to_px_y(rect.y + rect.h));
        for py in ys {
            for px in xs.clone() {
                self.set(px, py, color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        if radius <= 0 {
            return;
        }
        let (cx2, cy2, r2) = (
            center.x as i64 * 2,
            center.y as i64 * 2,
            radius as i64 * 2,
        );
        let xs = Self::span(
            self.to_px_x(center.x - radius),
            self.to_px_x(center.x + radius),
        );
        let ys = Self::span(
            self.to_px_y(center.y - radius),
            self.to_px_y(center.y + radius),
        );
        for py in ys {
            let dy = self.world_y2(py) - cy2;
            for px in xs.clone() {
                let dx = self.world_x2(px) - cx2;
                if dx * dx + dy * dy <= r2 * r2 {
                    self.set(px, py, color);
                }
            }
        }
        // A circle smaller than one pixel still shows up.
        self.set(self.to_px_x(center.x), self.to_px_y(center.y), color);
    }

    /// Sample `sprite` (world-sized) at each covered pixel center. Pixels
    /// below the alpha threshold are skipped.
    pub fn draw_image(&mut self, sprite: &Sprite, top_left: Point) {
        let (w, h) = (sprite.width() as i32, sprite.height() as i32);
        let xs = Self::span(self.to_px_x(top_left.x), self.to_px_x(top_left.x + w));
        let ys = Self::span(self.to_px_y(top_left.y), self.to_px_y(top_left.y + h));
        for py in ys {
            let sy = (self.world_y2(py) / 2 - top_left.y as i64).clamp(0, h as i64 - 1);
            for px in xs.clone() {
                let sx = (self.world_x2(px) / 2 - top_left.x as i64).clamp(0, w as i64 - 1);
                if let Some(p) = sprite.pixel(sx as u32, sy as u32) {
                    if p.is_opaque() {
                        self.set(px, py, p.rgb());
                    }
                }
            }
        }
    }

    /// Queue text with its top-left corner at world `at`.
    pub fn draw_text(&mut self, text: &str, size: u16, at: Point, color: Rgb) {
        let col = self.to_px_x(at.x);
        let row = self.to_px_y(at.y) / 2;
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.texts.push(TextRun {
            col: col as u16,
            row: row as u16,
            text: text.to_string(),
            fg: color,
            bold: size >= BOLD_TEXT_SIZE,
        });
    }

    /// Write the canvas into `fb`, resizing it to the cell grid.
    pub fn compose(&self, fb: &mut FrameBuffer) {
        fb.resize(self.cols, self.rows);
        let w = self.px_w();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let top = self.pixels[(row as i64 * 2 * w + col as i64) as usize];
                let bottom = self.pixels[((row as i64 * 2 + 1) * w + col as i64) as usize];
                let cell = if top == bottom {
                    Cell {
                        ch: ' ',
                        style: CellStyle {
                            fg: top,
                            bg: top,
                            bold: false,
                        },
                    }
                } else {
                    Cell {
                        ch: UPPER_HALF,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    }
                };
                fb.set(col, row, cell);
            }
        }

        for run in &self.texts {
            for (i, ch) in run.text.chars().enumerate() {
                let col = run.col as usize + i;
                if col >= self.cols as usize {
                    break;
                }
                let col = col as u16;
                // Text sits on the color of the upper pixel behind it.
                let bg = fb.get(col, run.row).map(|c| c.style.fg).unwrap_or_default();
                fb.set(
                    col,
                    run.row,
                    Cell {
                        ch,
                        style: CellStyle {
                            fg: run.fg,
                            bg,
                            bold: run.bold,
                        },
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const SKY: Rgb = Rgb::new(200, 220, 255);

    #[test]
    fn world_scales_to_grid() {
        // 800x600 on 80x30 cells: 10 world px per column, 10 per pixel row.
        let mut c = PixelCanvas::new(800, 600, 80, 30);
        c.clear(SKY);
        c.fill_rect(Rect::new(100, 500, 600, 80), RED);
        assert_eq!(c.pixel(10, 50), Some(RED));
        assert_eq!(c.pixel(69, 57), Some(RED));
        assert_eq!(c.pixel(70, 50), Some(SKY));
        assert_eq!(c.pixel(10, 58), Some(SKY));
    }

    #[test]
    fn half_blocks_pair_vertical_pixels() {
        let mut c = PixelCanvas::new(4, 4, 4, 2);
        c.clear(SKY);
        c.fill_rect(Rect::new(0, 1, 1, 1), RED);
        let mut fb = FrameBuffer::new(1, 1);
        c.compose(&mut fb);

        assert_eq!((fb.width(), fb.height()), (4, 2));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, UPPER_HALF);
        assert_eq!((cell.style.fg, cell.style.bg), (SKY, RED));
        assert_eq!(fb.get(1, 0).unwrap().ch, ' ');
    }

    #[test]
    fn circle_stays_inside_its_box() {
        // 1:1 scale: 100 columns, 50 rows of two pixels.
        let mut c = PixelCanvas::new(100, 100, 100, 50);
        c.clear(SKY);
        c.fill_circle(Point::new(50, 50), 10, RED);
        assert_eq!(c.pixel(50, 50), Some(RED));
        assert_eq!(c.pixel(59, 50), Some(RED));
        assert_eq!(c.pixel(41, 41), Some(SKY));
        assert_eq!(c.pixel(61, 50), Some(SKY));
    }

    #[test]
    fn transparent_sprite_pixels_are_skipped() {
        let mut c = PixelCanvas::new(4, 4, 4, 2);
        c.clear(SKY);
        let clear = Rgba::new(0, 0, 0, 0);
        let solid = Rgba::new(255, 0, 0, 255);
        let sprite = Sprite::from_pixels(2, 1, vec![clear, solid]).unwrap();
        c.draw_image(&sprite, Point::new(1, 0));
        assert_eq!(c.pixel(1, 0), Some(SKY));
        assert_eq!(c.pixel(2, 0), Some(RED));
    }

    #[test]
    fn text_overlays_cells_and_large_text_is_bold() {
        let mut c = PixelCanvas::new(800, 600, 80, 30);
        c.clear(SKY);
        c.draw_text("Score: 5", 36, Point::new(250, 350), RED);
        c.draw_text("Time", 24, Point::new(10, 10), RED);
        let mut fb = FrameBuffer::new(80, 30);
        c.compose(&mut fb);

        assert!(fb.row_text(17).starts_with(&format!("{}Score: 5", " ".repeat(25))));
        let s = fb.get(25, 17).unwrap();
        assert!(s.style.bold);
        assert_eq!((s.style.fg, s.style.bg), (RED, SKY));
        assert!(!fb.get(1, 0).unwrap().style.bold);
    }

    #[test]
    fn text_is_clipped_at_right_edge() {
        let mut c = PixelCanvas::new(10, 10, 5, 5);
        c.draw_text("abcdefgh", 20, Point::new(6, 0), RED);
        let mut fb = FrameBuffer::new(5, 5);
        c.compose(&mut fb);
        assert_eq!(fb.row_text(0), "   ab");
    }
}
