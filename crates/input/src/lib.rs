//! Terminal input module.
//!
//! Maps `crossterm` key events into menu events and held flight keys and
//! provides [`CrosstermInput`], the terminal [`InputSource`](crate::engine::InputSource).
//! Works with terminals that never emit key-release events by falling back
//! to a release timeout.

pub mod held;
pub mod map;
pub mod source;

pub use tui_takeoff_engine as engine;
pub use tui_takeoff_types as types;

pub use held::HeldKeyTracker;
pub use map::{flight_key, menu_event, should_quit};
pub use source::CrosstermInput;
