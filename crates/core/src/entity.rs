//! Aircraft and hazard entities.
//!
//! Both are plain data plus derived geometry. The aircraft's position is its
//! top-left corner (the draw anchor); a hazard's position is its center.

use crate::config::GameConfig;
use crate::types::{AircraftModel, HazardKind, Point, Rect};

/// The player's aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aircraft {
    pub model: AircraftModel,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub speed: i32,
}

impl Aircraft {
    /// Spawn an aircraft at the configured spawn point.
    pub fn spawn(model: AircraftModel, config: &GameConfig) -> Self {
        let at = config.spawn_point();
        Self {
            model,
            x: at.x,
            y: at.y,
            width: config.aircraft.width,
            height: config.aircraft.height,
            speed: config.aircraft.speed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.model.name()
    }

    /// Top-left draw anchor.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Position plus half-size (integer halves).
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

/// A static obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hazard {
    pub kind: HazardKind,
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Hazard {
    pub fn new(kind: HazardKind, x: i32, y: i32, radius: i32) -> Self {
        Self { kind, x, y, radius }
    }

    /// Hazard positions are already centers.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Square the hazard is drawn into (image anchor is its top-left).
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2,
            self.radius * 2,
        )
    }
}
