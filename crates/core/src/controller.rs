//! Input/state controller.
//!
//! Turns the held-key set into aircraft motion and the one-way takeoff flag.

use crate::entity::Aircraft;
use crate::types::HeldKeys;

/// What a single controller step changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlStep {
    pub dx: i32,
    pub dy: i32,
    /// The trigger was accepted on this frame.
    pub takeoff_started: bool,
}

/// Apply one frame of input.
///
/// Before takeoff each held direction moves the aircraft by `speed` on its
/// axis; opposite keys cancel and diagonals are not normalized. The trigger is
/// read after movement, so the frame that starts takeoff still moves.
///
/// After takeoff directional keys are ignored and the aircraft climbs by
/// `climb_speed` (0 leaves it in place). `takeoff` never goes back to false.
pub fn apply_input(
    aircraft: &mut Aircraft,
    takeoff: &mut bool,
    keys: HeldKeys,
    climb_speed: i32,
) -> ControlStep {
    if *takeoff {
        aircraft.translate(0, -climb_speed);
        return ControlStep {
            dx: 0,
            dy: -climb_speed,
            takeoff_started: false,
        };
    }

    let speed = aircraft.speed;
    let mut dx = 0;
    let mut dy = 0;
    if keys.left {
        dx -= speed;
    }
    if keys.right {
        dx += speed;
    }
    if keys.up {
        dy -= speed;
    }
    if keys.down {
        dy += speed;
    }
    aircraft.translate(dx, dy);

    if keys.trigger {
        *takeoff = true;
    }

    ControlStep {
        dx,
        dy,
        takeoff_started: keys.trigger,
    }
}
