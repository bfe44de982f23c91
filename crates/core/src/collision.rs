//! Collision detector.
//!
//! The test is an axis-aligned proximity box around the aircraft's center,
//! not a circle-distance check: a hazard is hit when both axis distances are
//! strictly below the threshold.

use crate::entity::{Aircraft, Hazard};
use crate::types::Point;

/// `|a.x - b.x| < threshold && |a.y - b.y| < threshold`
pub fn within_proximity(a: Point, b: Point, threshold: i32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

/// First hazard (in iteration order) inside the aircraft's proximity box.
pub fn find_collision<'a>(
    aircraft: &Aircraft,
    hazards: &'a [Hazard],
    threshold: i32,
) -> Option<&'a Hazard> {
    let center = aircraft.center();
    hazards
        .iter()
        .find(|h| within_proximity(center, h.center(), threshold))
}
