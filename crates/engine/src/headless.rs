//! In-memory collaborators.
//!
//! These drive the loop without a terminal: a surface that records draw
//! calls, an input source that replays a script, and a clock that only moves
//! when told to (or when slept on).

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use crate::clock::Clock;
use crate::input::InputSource;
use crate::surface::Surface;
use crate::types::{FrameInput, HeldKeys, MenuEvent, Point, Rect, Rgb, Sprite};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Caption(String),
    Clear(Rgb),
    Rect(Rect, Rgb),
    Circle(Point, i32, Rgb),
    Image { top_left: Point, width: u32, height: u32 },
    Text { text: String, size: u16, at: Point, color: Rgb },
    Present,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of `present` calls so far.
    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }

    /// Draw calls of the most recently presented frame (from its `clear`).
    pub fn last_frame(&self) -> &[DrawOp] {
        let end = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Present)
            .unwrap_or(self.ops.len());
        let start = self.ops[..end]
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .unwrap_or(0);
        &self.ops[start..end]
    }

    /// All text drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.ops.push(DrawOp::Caption(caption.to_string()));
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        self.ops.push(DrawOp::Circle(center, radius, color));
    }

    fn draw_image(&mut self, sprite: &Sprite, top_left: Point) {
        self.ops.push(DrawOp::Image {
            top_left,
            width: sprite.width(),
            height: sprite.height(),
        });
    }

    fn draw_text(&mut self, text: &str, size: u16, at: Point, color: Rgb) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            size,
            at,
            color,
        });
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push(DrawOp::Present);
        Ok(())
    }
}

/// Replays scripted frames and menu events.
///
/// Once a script runs dry the source reports quit, so a loop driven by it
/// always terminates.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    menu: VecDeque<MenuEvent>,
    frames_polled: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_events(mut self, events: impl IntoIterator<Item = MenuEvent>) -> Self {
        self.menu.extend(events);
        self
    }

    /// Queue `count` frames holding `keys`.
    pub fn hold(mut self, keys: HeldKeys, count: usize) -> Self {
        for _ in 0..count {
            self.frames.push_back(FrameInput { quit: false, keys });
        }
        self
    }

    pub fn quit(mut self) -> Self {
        self.frames.push_back(FrameInput {
            quit: true,
            keys: HeldKeys::default(),
        });
        self
    }

    pub fn frames_polled(&self) -> usize {
        self.frames_polled
    }

    pub fn frames_left(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_frame(&mut self) -> Result<FrameInput> {
        self.frames_polled += 1;
        Ok(self.frames.pop_front().unwrap_or(FrameInput {
            quit: true,
            keys: HeldKeys::default(),
        }))
    }

    fn next_menu_event(&mut self, _timeout: Duration) -> Result<Option<MenuEvent>> {
        Ok(Some(self.menu.pop_front().unwrap_or(MenuEvent::Quit)))
    }
}

/// Clock that advances only through `advance` and `sleep`.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now_ms: u64,
    slept: Vec<Duration>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            slept: Vec::new(),
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    /// Every sleep requested so far.
    pub fn slept(&self) -> &[Duration] {
        &self.slept
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep(&mut self, duration: Duration) {
        self.now_ms += duration.as_millis() as u64;
        self.slept.push(duration);
    }
}
