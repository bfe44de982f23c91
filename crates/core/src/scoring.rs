//! Scoring module - elapsed time, score and takeoff success
//!
//! The hazard bonus counts every placed hazard, whether or not the aircraft
//! ever came near it.

use crate::config::ScoringRules;

/// Whole seconds elapsed since `start_ms` (floor). A clock that went
/// backwards counts as zero.
pub fn elapsed_seconds(start_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(start_ms) / 1000
}

/// `max(0, base - elapsed * time_penalty + hazards * hazard_bonus)`
pub fn calculate_score(elapsed_secs: u64, hazard_count: usize, rules: &ScoringRules) -> u64 {
    let elapsed = i64::try_from(elapsed_secs).unwrap_or(i64::MAX);
    let hazards = i64::try_from(hazard_count).unwrap_or(i64::MAX);
    let raw = rules
        .base
        .saturating_sub(elapsed.saturating_mul(rules.time_penalty))
        .saturating_add(hazards.saturating_mul(rules.hazard_bonus));
    raw.max(0) as u64
}

/// Success requires the takeoff phase, altitude strictly above the line
/// (`y < success_altitude`) and no collision.
pub fn is_takeoff_success(takeoff: bool, aircraft_y: i32, success_altitude: i32, collided: bool) -> bool {
    takeoff && aircraft_y < success_altitude && !collided
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_at_zero_seconds() {
        assert_eq!(calculate_score(0, 3, &ScoringRules::default()), 1600);
    }

    #[test]
    fn score_at_five_seconds() {
        assert_eq!(calculate_score(5, 3, &ScoringRules::default()), 1100);
    }

    #[test]
    fn score_floors_at_zero() {
        assert_eq!(calculate_score(20, 3, &ScoringRules::default()), 0);
        assert_eq!(calculate_score(u64::MAX, 3, &ScoringRules::default()), 0);
    }

    #[test]
    fn score_at_exact_break_even() {
        // 1000 - 1600 + 600 = 0
        assert_eq!(calculate_score(16, 3, &ScoringRules::default()), 0);
        assert_eq!(calculate_score(15, 3, &ScoringRules::default()), 100);
    }

    #[test]
    fn elapsed_floors_to_whole_seconds() {
        assert_eq!(elapsed_seconds(1_000, 1_999), 0);
        assert_eq!(elapsed_seconds(1_000, 2_000), 1);
        assert_eq!(elapsed_seconds(0, 5_999), 5);
        assert_eq!(elapsed_seconds(5_000, 1_000), 0);
    }

    #[test]
    fn success_predicate() {
        assert!(is_takeoff_success(true, 49, 50, false));
        assert!(!is_takeoff_success(true, 50, 50, false));
        assert!(!is_takeoff_success(false, 10, 50, false));
        assert!(!is_takeoff_success(true, 10, 50, true));
    }
}
