//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the rules (`core`), the loop driver (`engine`) and the terminal
//! collaborators alike.
//!
//! # World Dimensions
//!
//! The world is an 800x600 pixel scene. Positions are signed pixels with the
//! origin in the top-left corner and `y` growing downwards, so climbing means
//! decreasing `y`.
//!
//! # Default Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 800 | World width in pixels |
//! | `SCREEN_HEIGHT` | 600 | World height in pixels |
//! | `TARGET_FPS` | 60 | Frame-rate target of the loop driver |
//! | `AIRCRAFT_WIDTH` | 60 | Aircraft sprite width |
//! | `AIRCRAFT_HEIGHT` | 30 | Aircraft sprite height |
//! | `AIRCRAFT_SPEED` | 5 | Pixels per frame per held direction |
//! | `HAZARD_COUNT` | 3 | Hazards placed per session |
//! | `HAZARD_RADIUS` | 24 | Hazard radius (48px draw size) |
//! | `COLLISION_THRESHOLD` | 40 | Exclusive proximity box half-extent |
//! | `SUCCESS_ALTITUDE` | 50 | Takeoff succeeds once `y` is below this |
//! | `CRASH_DISPLAY_MS` | 2000 | Pause on the crash screen |
//! | `SUCCESS_DISPLAY_MS` | 3000 | Pause on the success screen |
//!
//! # Examples
//!
//! ```
//! use tui_takeoff_types::{AircraftModel, HazardKind, HeldKeys, FlightKey};
//!
//! assert_eq!(AircraftModel::Boeing737.name(), "Boeing 737");
//! assert_eq!(HazardKind::Police.initial(), 'P');
//!
//! let keys = HeldKeys::default().with(FlightKey::Left).with(FlightKey::Up);
//! assert!(keys.left && keys.up && !keys.trigger);
//! ```

/// World width in pixels
pub const SCREEN_WIDTH: i32 = 800;

/// World height in pixels
pub const SCREEN_HEIGHT: i32 = 600;

/// Frame-rate target (frames per second)
pub const TARGET_FPS: u32 = 60;

/// Aircraft width in pixels
pub const AIRCRAFT_WIDTH: i32 = 60;

/// Aircraft height in pixels
pub const AIRCRAFT_HEIGHT: i32 = 30;

/// Aircraft movement per frame, per held direction
pub const AIRCRAFT_SPEED: i32 = 5;

/// Distance of the aircraft spawn point above the bottom edge
pub const SPAWN_BOTTOM_OFFSET: i32 = 80;

/// Number of hazards placed per session
pub const HAZARD_COUNT: usize = 3;

/// Upper bound on configurable hazard count
pub const MAX_HAZARDS: usize = 16;

/// Hazard radius in pixels
pub const HAZARD_RADIUS: i32 = 24;

/// Horizontal margin of the hazard placement region
pub const HAZARD_MARGIN_X: i32 = 100;

/// Top edge of the hazard placement region
pub const HAZARD_MIN_Y: i32 = 150;

/// Distance of the hazard placement region's lower edge from the bottom
pub const HAZARD_BOTTOM_MARGIN: i32 = 250;

/// Half-extent of the proximity box (exclusive)
pub const COLLISION_THRESHOLD: i32 = 40;

/// Takeoff succeeds once the aircraft's `y` is strictly below this
pub const SUCCESS_ALTITUDE: i32 = 50;

/// Autonomous climb per frame after takeoff
pub const CLIMB_SPEED: i32 = 5;

/// Base score before time penalty and hazard bonus
pub const SCORE_BASE: i64 = 1000;

/// Points lost per elapsed second
pub const SCORE_TIME_PENALTY: i64 = 100;

/// Points gained per placed hazard
pub const SCORE_HAZARD_BONUS: i64 = 200;

/// Pause on the crash screen
pub const CRASH_DISPLAY_MS: u64 = 2000;

/// Pause on the success screen
pub const SUCCESS_DISPLAY_MS: u64 = 3000;

/// Window caption / terminal title
pub const CAPTION: &str = "Airplane Takeoff Adventure";


/// Selectable aircraft models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftModel {
    Boeing737,
    AirbusA320,
    Cessna172,
}

impl AircraftModel {
    /// All models in menu order
    pub const ALL: [AircraftModel; 3] = [
        AircraftModel::Boeing737,
        AircraftModel::AirbusA320,
        AircraftModel::Cessna172,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            AircraftModel::Boeing737 => "Boeing 737",
            AircraftModel::AirbusA320 => "Airbus A320",
            AircraftModel::Cessna172 => "Cessna 172",
        }
    }

    /// Image file stem: the name lowercased with spaces replaced by underscores
    pub fn asset_stem(&self) -> String {
        asset_stem(self.name())
    }
}

/// Hazard identities
///
/// Corporate logos plus a police officer. Every hazard drawn in a session is
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardKind {
    Apple,
    Google,
    Tesla,
    Microsoft,
    Amazon,
    Police,
}

impl HazardKind {
    pub const ALL: [HazardKind; 6] = [
        HazardKind::Apple,
        HazardKind::Google,
        HazardKind::Tesla,
        HazardKind::Microsoft,
        HazardKind::Amazon,
        HazardKind::Police,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HazardKind::Apple => "Apple",
            HazardKind::Google => "Google",
            HazardKind::Tesla => "Tesla",
            HazardKind::Microsoft => "Microsoft",
            HazardKind::Amazon => "Amazon",
            HazardKind::Police => "Police",
        }
    }

    /// Single-letter label used by the fallback drawing
    pub fn initial(&self) -> char {
        self.name().chars().next().unwrap_or('?')
    }

    pub fn asset_stem(&self) -> String {
        asset_stem(self.name())
    }

    /// Position in [`HazardKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            HazardKind::Apple => 0,
            HazardKind::Google => 1,
            HazardKind::Tesla => 2,
            HazardKind::Microsoft => 3,
            HazardKind::Amazon => 4,
            HazardKind::Police => 5,
        }
    }
}

/// Selectable runways
///
/// The runway is cosmetic: both share the same scene and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runway {
    A,
    B,
}

impl Runway {
    pub const ALL: [Runway; 2] = [Runway::A, Runway::B];

    pub fn name(&self) -> &'static str {
        match self {
            Runway::A => "Runway A",
            Runway::B => "Runway B",
        }
    }
}

fn asset_stem(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Keys that steer the aircraft during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightKey {
    Left,
    Right,
    Up,
    Down,
    /// Starts the takeoff phase
    Trigger,
}

impl FlightKey {
    pub const ALL: [FlightKey; 5] = [
        FlightKey::Left,
        FlightKey::Right,
        FlightKey::Up,
        FlightKey::Down,
        FlightKey::Trigger,
    ];

    /// Stable index for per-key tables
    pub fn index(&self) -> usize {
        match self {
            FlightKey::Left => 0,
            FlightKey::Right => 1,
            FlightKey::Up => 2,
            FlightKey::Down => 3,
            FlightKey::Trigger => 4,
        }
    }
}

/// Set of flight keys currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub trigger: bool,
}

impl HeldKeys {
    pub fn with(mut self, key: FlightKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: FlightKey, held: bool) {
        match key {
            FlightKey::Left => self.left = held,
            FlightKey::Right => self.right = held,
            FlightKey::Up => self.up = held,
            FlightKey::Down => self.down = held,
            FlightKey::Trigger => self.trigger = held,
        }
    }

    pub fn is_held(&self, key: FlightKey) -> bool {
        match key {
            FlightKey::Left => self.left,
            FlightKey::Right => self.right,
            FlightKey::Up => self.up,
            FlightKey::Down => self.down,
            FlightKey::Trigger => self.trigger,
        }
    }

    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Discrete menu navigation events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Up,
    Down,
    Confirm,
    Quit,
}

/// Per-frame input as seen by the loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// A quit signal arrived since the last poll
    pub quit: bool,
    pub keys: HeldKeys,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 32-bit RGBA pixel of a decoded sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Alpha-tested visibility (no blending on a terminal)
    pub fn is_opaque(&self) -> bool {
        self.a >= 128
    }
}

/// A point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// A decoded image scaled to its on-screen size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Build a sprite from row-major pixels.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Single-color sprite
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }
}
