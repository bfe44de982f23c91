use arrayvec::ArrayVec;

use crate::entity::{Aircraft, Hazard};
use crate::session::SessionEnd;
use crate::types::{Runway, MAX_HAZARDS};

/// Read-only view of a session for one frame of drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub aircraft: Aircraft,
    pub hazards: ArrayVec<Hazard, MAX_HAZARDS>,
    pub runway: Runway,
    pub takeoff: bool,
    pub collided: bool,
    pub running: bool,
    pub elapsed_secs: u64,
    pub frame: u64,
    pub end: Option<SessionEnd>,
}

impl SessionSnapshot {
    pub fn new(aircraft: Aircraft, runway: Runway) -> Self {
        Self {
            aircraft,
            hazards: ArrayVec::new(),
            runway,
            takeoff: false,
            collided: false,
            running: true,
            elapsed_secs: 0,
            frame: 0,
            end: None,
        }
    }
}
