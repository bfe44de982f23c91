//! Rendering collaborator contract.
//!
//! Coordinates are world pixels. Implementations decide how the world maps
//! onto the physical display.

use anyhow::Result;

use crate::types::{Point, Rect, Rgb, Sprite};

pub trait Surface {
    /// Window caption (terminal title). Called once at startup.
    fn set_caption(&mut self, caption: &str) -> Result<()>;

    /// Start a new frame filled with `color`.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb);

    /// Draw a sprite with its top-left corner at `top_left`.
    fn draw_image(&mut self, sprite: &Sprite, top_left: Point);

    /// Draw `text` with its top-left corner at `at`. `size` is the nominal
    /// font size in pixels.
    fn draw_text(&mut self, text: &str, size: u16, at: Point, color: Rgb);

    /// Show everything drawn since the last `clear`.
    fn present(&mut self) -> Result<()>;
}

/// Scene colors.
pub mod palette {
    use crate::types::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY: Rgb = Rgb::new(180, 180, 180);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const SKY: Rgb = Rgb::new(200, 220, 255);
}
