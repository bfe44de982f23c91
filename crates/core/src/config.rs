//! Game configuration.
//!
//! Every tunable of a session lives in [`GameConfig`]. The struct is built once
//! (defaults, or deserialized from JSON with per-field defaults) and handed to
//! [`crate::Session::new`]. Nothing in the rules reads global state.

use serde::Deserialize;
use thiserror::Error;

use crate::types::*;

/// Reasons a configuration cannot drive a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen size must be positive, got {width}x{height}")]
    ScreenSize { width: i32, height: i32 },
    #[error("fps must be positive")]
    ZeroFps,
    #[error("hazard count must be in 1..={max}, got {count}")]
    HazardCount { count: usize, max: usize },
    #[error("hazard placement region is empty: x in [{min_x}, {max_x}], y in [{min_y}, {max_y}]")]
    EmptyRegion {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
    #[error("aircraft size and speed must be positive")]
    Aircraft,
    #[error("climb speed must not be negative, got {0}")]
    ClimbSpeed(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: TARGET_FPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub width: i32,
    pub height: i32,
    pub speed: i32,
    /// Spawn distance above the bottom edge.
    pub spawn_bottom_offset: i32,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            width: AIRCRAFT_WIDTH,
            height: AIRCRAFT_HEIGHT,
            speed: AIRCRAFT_SPEED,
            spawn_bottom_offset: SPAWN_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub count: usize,
    pub radius: i32,
    pub margin_x: i32,
    pub min_y: i32,
    pub bottom_margin: i32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            count: HAZARD_COUNT,
            radius: HAZARD_RADIUS,
            margin_x: HAZARD_MARGIN_X,
            min_y: HAZARD_MIN_Y,
            bottom_margin: HAZARD_BOTTOM_MARGIN,
        }
    }
}

/// Score formula coefficients:
/// `max(0, base - elapsed_secs * time_penalty + hazards * hazard_bonus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base: i64,
    pub time_penalty: i64,
    pub hazard_bonus: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base: SCORE_BASE,
            time_penalty: SCORE_TIME_PENALTY,
            hazard_bonus: SCORE_HAZARD_BONUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub aircraft: AircraftConfig,
    pub hazards: HazardConfig,
    pub scoring: ScoringRules,
    pub collision_threshold: i32,
    pub success_altitude: i32,
    /// Pixels climbed per frame once takeoff is triggered. 0 keeps the
    /// aircraft where it was when the trigger was pressed.
    pub climb_speed: i32,
    pub crash_display_ms: u64,
    pub success_display_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            aircraft: AircraftConfig::default(),
            hazards: HazardConfig::default(),
            scoring: ScoringRules::default(),
            collision_threshold: COLLISION_THRESHOLD,
            success_altitude: SUCCESS_ALTITUDE,
            climb_speed: CLIMB_SPEED,
            crash_display_ms: CRASH_DISPLAY_MS,
            success_display_ms: SUCCESS_DISPLAY_MS,
        }
    }
}

/// Inclusive bounds hazards are placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRegion {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PlacementRegion {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height, fps } = self.screen;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::ScreenSize { width, height });
        }
        if fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        let count = self.hazards.count;
        if count == 0 || count > MAX_HAZARDS {
            return Err(ConfigError::HazardCount {
                count,
                max: MAX_HAZARDS,
            });
        }
        let r = self.placement_region();
        if r.min_x > r.max_x || r.min_y > r.max_y {
            return Err(ConfigError::EmptyRegion {
                min_x: r.min_x,
                max_x: r.max_x,
                min_y: r.min_y,
                max_y: r.max_y,
            });
        }
        let a = self.aircraft;
        if a.width <= 0 || a.height <= 0 || a.speed <= 0 {
            return Err(ConfigError::Aircraft);
        }
        if self.climb_speed < 0 {
            return Err(ConfigError::ClimbSpeed(self.climb_speed));
        }
        Ok(())
    }

    pub fn placement_region(&self) -> PlacementRegion {
        PlacementRegion {
            min_x: self.hazards.margin_x,
            max_x: self.screen.width - self.hazards.margin_x,
            min_y: self.hazards.min_y,
            max_y: self.screen.height - self.hazards.bottom_margin,
        }
    }

    /// Top-left corner of a freshly spawned aircraft.
    pub fn spawn_point(&self) -> Point {
        Point::new(
            self.screen.width / 2 - self.aircraft.width / 2,
            self.screen.height - self.aircraft.spawn_bottom_offset,
        )
    }

    pub fn frame_ms(&self) -> u64 {
        1000 / self.screen.fps.max(1) as u64
    }
}
