//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of a takeoff session. It has **no
//! dependencies** on terminals, files or clocks: time comes in as a
//! millisecond timestamp and randomness through [`RandomSource`], which makes
//! every rule reproducible in tests.
//!
//! # Module Structure
//!
//! - [`config`]: immutable [`GameConfig`] with validation
//! - [`entity`]: [`Aircraft`] and [`Hazard`] with derived geometry
//! - [`rng`]: seeded random source and hazard placement
//! - [`controller`]: held keys to aircraft motion and the takeoff flag
//! - [`collision`]: axis-aligned proximity box test
//! - [`scoring`]: elapsed seconds, score formula, success predicate
//! - [`session`]: the per-frame state machine tying it together
//! - [`menu`]: wrap-around selection state for the pre-game menus
//!
//! # Example
//!
//! ```
//! use tui_takeoff_core::{FrameOutcome, GameConfig, Session, SimpleRng};
//! use tui_takeoff_types::{AircraftModel, FlightKey, HeldKeys, Runway};
//!
//! let mut session = Session::new(
//!     GameConfig::default(),
//!     AircraftModel::Boeing737,
//!     Runway::A,
//!     &mut SimpleRng::new(7),
//!     0,
//! )
//! .unwrap();
//!
//! let keys = HeldKeys::default().with(FlightKey::Left);
//! let outcome = session.step(keys, 16);
//! assert_eq!(session.aircraft().x, 365);
//! assert!(matches!(outcome, FrameOutcome::Running | FrameOutcome::Ended(_)));
//! ```

pub mod collision;
pub mod config;
pub mod controller;
pub mod entity;
pub mod menu;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_takeoff_types as types;

// Re-export commonly used types for convenience
pub use collision::{find_collision, within_proximity};
pub use config::{ConfigError, GameConfig, PlacementRegion, ScoringRules};
pub use controller::{apply_input, ControlStep};
pub use entity::{Aircraft, Hazard};
pub use menu::{Menu, MenuStep};
pub use rng::{place_hazards, RandomSource, SimpleRng};
pub use scoring::{calculate_score, elapsed_seconds, is_takeoff_success};
pub use session::{FrameOutcome, Session, SessionEnd};
pub use snapshot::SessionSnapshot;
