//! Loop driver module - menus, pacing, painting and outcome screens
//!
//! The driver owns no terminal. It talks to three collaborators:
//!
//! | Trait | Role | Terminal impl | Headless impl |
//! |-------|------|---------------|---------------|
//! | [`Surface`] | draw calls | `tui_takeoff_term::TerminalSurface` | [`RecordingSurface`] |
//! | [`InputSource`] | quit + held keys, menu events | `tui_takeoff_input::CrosstermInput` | [`ScriptedInput`] |
//! | [`Clock`] | milliseconds + sleep | [`SystemClock`] | [`ManualClock`] |
//!
//! [`play`] runs the whole flow; [`run_session`] runs a single session.

pub mod assets;
pub mod clock;
pub mod driver;
pub mod headless;
pub mod input;
pub mod scene;
pub mod surface;

pub use tui_takeoff_core as core;
pub use tui_takeoff_types as types;

pub use assets::{asset_path, load_image, AssetError, SpriteSet};
pub use clock::{Clock, FramePacer, SystemClock};
pub use driver::{play, run_menu, run_session, PlayReport, SpriteSource, MENU_POLL};
pub use headless::{DrawOp, ManualClock, RecordingSurface, ScriptedInput};
pub use input::InputSource;
pub use surface::{palette, Surface};
