//! Airplane Takeoff Adventure (workspace facade crate).
//!
//! Re-exports the member crates as `tui_takeoff::{core,engine,input,term,types}`
//! and adds config-file loading for the binary.

pub mod config;

pub use tui_takeoff_core as core;
pub use tui_takeoff_engine as engine;
pub use tui_takeoff_input as input;
pub use tui_takeoff_term as term;
pub use tui_takeoff_types as types;
