//! RNG module - seeded random source and hazard placement
//!
//! Hazard layout is the only randomized part of a session. Placement draws
//! from a [`RandomSource`] so tests can inject a fixed sequence and the binary
//! can replay a layout from a seed.
//!
//! [`SimpleRng`] is a small LCG good enough for picking positions.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::entity::Hazard;
use crate::types::{HazardKind, MAX_HAZARDS};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Random value in range [0, max). `max` must be non-zero.
    fn next_below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Random value in the inclusive range [lo, hi]. Returns `lo` when `hi < lo`.
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u32;
        lo + self.next_below(span) as i32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current state; seeding a new RNG with it continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Place `config.hazards.count` hazards inside the placement region.
///
/// Each hazard draws its kind, then x, then y. Kinds may repeat.
pub fn place_hazards(
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> ArrayVec<Hazard, MAX_HAZARDS> {
    let region = config.placement_region();
    let count = config.hazards.count.min(MAX_HAZARDS);

    let mut hazards = ArrayVec::new();
    for _ in 0..count {
        let kind = HazardKind::ALL[rng.next_below(HazardKind::ALL.len() as u32) as usize];
        let x = rng.next_in(region.min_x, region.max_x);
        let y = rng.next_in(region.min_y, region.max_y);
        hazards.push(Hazard::new(kind, x, y, config.hazards.radius));
    }
    hazards
}
