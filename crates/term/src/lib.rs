//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Draw calls
//! land on a pixel canvas scaled to the terminal, which is composed into a
//! framebuffer of half-block cells and flushed with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render the fixed-size world at whatever size the terminal has
//! - Only write the cells that changed

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_takeoff_engine as engine;
pub use tui_takeoff_types as types;

pub use canvas::{PixelCanvas, BOLD_TEXT_SIZE};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::{CanvasSurface, TerminalSurface};
