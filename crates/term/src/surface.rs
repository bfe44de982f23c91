//! [`Surface`] implementations backed by the pixel canvas.

use anyhow::Result;
use crossterm::terminal;
use tracing::debug;

use crate::canvas::PixelCanvas;
use crate::engine::Surface;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::{Point, Rect, Rgb, Sprite};

/// Draws into a canvas and composes it into a framebuffer on `present`.
/// Touches no terminal.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: PixelCanvas,
    frame: FrameBuffer,
    caption: Option<String>,
}

impl CanvasSurface {
    pub fn new(world_w: i32, world_h: i32, cols: u16, rows: u16) -> Self {
        Self {
            canvas: PixelCanvas::new(world_w, world_h, cols, rows),
            frame: FrameBuffer::new(cols, rows),
            caption: None,
        }
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// The last presented frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Follow a terminal resize. Returns true if the grid changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        if self.canvas.cols() == cols.max(1) && self.canvas.rows() == rows.max(1) {
            return false;
        }
        self.canvas.resize(cols, rows);
        true
    }
}

impl Surface for CanvasSurface {
    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.caption = Some(caption.to_string());
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.canvas.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        self.canvas.fill_circle(center, radius, color);
    }

    fn draw_image(&mut self, sprite: &Sprite, top_left: Point) {
        self.canvas.draw_image(sprite, top_left);
    }

    fn draw_text(&mut self, text: &str, size: u16, at: Point, color: Rgb) {
        self.canvas.draw_text(text, size, at, color);
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.compose(&mut self.frame);
        Ok(())
    }
}

/// Canvas surface flushed to the real terminal, scaled to its current size.
pub struct TerminalSurface {
    inner: CanvasSurface,
    renderer: TerminalRenderer,
}

impl TerminalSurface {
    /// Uses the terminal's current size. The renderer should already have
    /// entered the alternate screen.
    pub fn new(world_w: i32, world_h: i32, renderer: TerminalRenderer) -> Self {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        Self {
            inner: CanvasSurface::new(world_w, world_h, cols, rows),
            renderer,
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }
}

impl Surface for TerminalSurface {
    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.inner.set_caption(caption)?;
        self.renderer.set_title(caption)
    }

    fn clear(&mut self, color: Rgb) {
        self.inner.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.inner.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        self.inner.fill_circle(center, radius, color);
    }

    fn draw_image(&mut self, sprite: &Sprite, top_left: Point) {
        self.inner.draw_image(sprite, top_left);
    }

    fn draw_text(&mut self, text: &str, size: u16, at: Point, color: Rgb) {
        self.inner.draw_text(text, size, at, color);
    }

    fn present(&mut self) -> Result<()> {
        self.inner.present()?;
        self.renderer.draw_swap(&mut self.inner.frame)?;

        // A resize takes effect from the next frame on.
        let (cols, rows) = terminal::size()?;
        if self.inner.resize(cols, rows) {
            debug!(cols, rows, "terminal resized");
            self.renderer.invalidate();
        }
        Ok(())
    }
}
