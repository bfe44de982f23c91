//! Session state - one play-through from spawn to a terminal outcome
//!
//! A [`Session`] owns the aircraft, the hazard set and the monotonic flags.
//! [`Session::step`] runs one frame in a fixed order:
//!
//! 1. input controller (movement, takeoff trigger, climb)
//! 2. collision detector (every frame, before and after takeoff)
//! 3. outcome evaluator (success only if nothing was hit this frame)
//!
//! Once a terminal outcome fires `running` is false and further steps are
//! no-ops.

use arrayvec::ArrayVec;

use crate::collision::find_collision;
use crate::config::{ConfigError, GameConfig};
use crate::controller::apply_input;
use crate::entity::{Aircraft, Hazard};
use crate::rng::{place_hazards, RandomSource};
use crate::scoring::{calculate_score, elapsed_seconds, is_takeoff_success};
use crate::snapshot::SessionSnapshot;
use crate::types::{AircraftModel, HazardKind, HeldKeys, Runway, MAX_HAZARDS};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// Quit signal; no outcome screen.
    Quit,
    Crashed { kind: HazardKind },
    TookOff { elapsed_secs: u64, score: u64 },
}

/// Result of a single frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep looping and redraw.
    Running,
    /// The session ended on this frame.
    Ended(SessionEnd),
    /// The session had already ended; nothing changed.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    runway: Runway,
    aircraft: Aircraft,
    hazards: ArrayVec<Hazard, MAX_HAZARDS>,
    takeoff: bool,
    collided: bool,
    running: bool,
    start_ms: u64,
    frame: u64,
    end: Option<SessionEnd>,
}

impl Session {
    /// Start a session with a randomized hazard layout.
    pub fn new(
        config: GameConfig,
        model: AircraftModel,
        runway: Runway,
        rng: &mut impl RandomSource,
        start_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let hazards = place_hazards(&config, rng);
        Ok(Self::assemble(config, model, runway, hazards, start_ms))
    }

    /// Start a session with an explicit hazard layout.
    ///
    /// Hazards beyond `MAX_HAZARDS` are dropped.
    pub fn with_hazards(
        config: GameConfig,
        model: AircraftModel,
        runway: Runway,
        hazards: &[Hazard],
        start_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let hazards = hazards.iter().copied().take(MAX_HAZARDS).collect();
        Ok(Self::assemble(config, model, runway, hazards, start_ms))
    }

    fn assemble(
        config: GameConfig,
        model: AircraftModel,
        runway: Runway,
        hazards: ArrayVec<Hazard, MAX_HAZARDS>,
        start_ms: u64,
    ) -> Self {
        Self {
            aircraft: Aircraft::spawn(model, &config),
            config,
            runway,
            hazards,
            takeoff: false,
            collided: false,
            running: true,
            start_ms,
            frame: 0,
            end: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn runway(&self) -> Runway {
        self.runway
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    pub fn takeoff(&self) -> bool {
        self.takeoff
    }

    pub fn collided(&self) -> bool {
        self.collided
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        elapsed_seconds(self.start_ms, now_ms)
    }

    /// Handle the quit signal. Has no effect after a terminal outcome.
    pub fn quit(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.end = Some(SessionEnd::Quit);
    }

    /// Advance one frame.
    pub fn step(&mut self, keys: HeldKeys, now_ms: u64) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Finished;
        }
        self.frame = self.frame.wrapping_add(1);

        apply_input(
            &mut self.aircraft,
            &mut self.takeoff,
            keys,
            self.config.climb_speed,
        );

        if let Some(hit) = find_collision(
            &self.aircraft,
            &self.hazards,
            self.config.collision_threshold,
        ) {
            let end = SessionEnd::Crashed { kind: hit.kind };
            self.collided = true;
            return self.finish(end);
        }

        if is_takeoff_success(
            self.takeoff,
            self.aircraft.y,
            self.config.success_altitude,
            self.collided,
        ) {
            let elapsed_secs = self.elapsed_secs(now_ms);
            let score = calculate_score(elapsed_secs, self.hazards.len(), &self.config.scoring);
            return self.finish(SessionEnd::TookOff {
                elapsed_secs,
                score,
            });
        }

        FrameOutcome::Running
    }

    fn finish(&mut self, end: SessionEnd) -> FrameOutcome {
        self.running = false;
        self.end = Some(end);
        FrameOutcome::Ended(end)
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut SessionSnapshot) {
        out.aircraft = self.aircraft;
        out.hazards.clear();
        out.hazards.extend(self.hazards.iter().copied());
        out.runway = self.runway;
        out.takeoff = self.takeoff;
        out.collided = self.collided;
        out.running = self.running;
        out.elapsed_secs = self.elapsed_secs(now_ms);
        out.frame = self.frame;
        out.end = self.end;
    }

    pub fn snapshot(&self, now_ms: u64) -> SessionSnapshot {
        let mut s = SessionSnapshot::new(self.aircraft, self.runway);
        self.snapshot_into(now_ms, &mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::FlightKey;

    fn hazard(kind: HazardKind, x: i32, y: i32) -> Hazard {
        Hazard::new(kind, x, y, 24)
    }

    /// Three hazards far away from the spawn point and the climb path.
    fn clear_sky() -> [Hazard; 3] {
        [
            hazard(HazardKind::Apple, 100, 150),
            hazard(HazardKind::Tesla, 700, 150),
            hazard(HazardKind::Amazon, 700, 350),
        ]
    }

    fn session(hazards: &[Hazard]) -> Session {
        Session::with_hazards(
            GameConfig::default(),
            AircraftModel::Boeing737,
            Runway::A,
            hazards,
            0,
        )
        .unwrap()
    }

    #[test]
    fn new_session_places_configured_hazards() {
        let s = Session::new(
            GameConfig::default(),
            AircraftModel::AirbusA320,
            Runway::B,
            &mut SimpleRng::new(42),
            1_000,
        )
        .unwrap();
        assert_eq!(s.hazards().len(), 3);
        assert!(s.running());
        assert!(!s.takeoff());
        assert_eq!(s.aircraft().position(), crate::types::Point::new(370, 520));
        assert_eq!(s.start_ms(), 1_000);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = GameConfig::default();
        cfg.screen.fps = 0;
        let err = Session::with_hazards(cfg, AircraftModel::Boeing737, Runway::A, &[], 0)
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroFps);
    }

    #[test]
    fn idle_session_runs_indefinitely() {
        let mut s = session(&clear_sky());
        for frame in 0..10_000u64 {
            assert_eq!(
                s.step(HeldKeys::default(), frame * 16),
                FrameOutcome::Running
            );
        }
        assert!(s.running());
        assert_eq!(s.aircraft().position(), crate::types::Point::new(370, 520));
    }

    #[test]
    fn crash_is_terminal_and_freezes_state() {
        // Hazard right above the spawn center (400, 535).
        let mut s = session(&[hazard(HazardKind::Police, 400, 500)]);
        let out = s.step(HeldKeys::default(), 16);
        assert_eq!(
            out,
            FrameOutcome::Ended(SessionEnd::Crashed {
                kind: HazardKind::Police
            })
        );
        assert!(s.collided());
        assert!(!s.running());

        let before = s.aircraft().position();
        let out = s.step(HeldKeys::default().with(FlightKey::Left), 32);
        assert_eq!(out, FrameOutcome::Finished);
        assert_eq!(s.aircraft().position(), before);
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn climb_reaches_success_and_scores() {
        let mut s = session(&clear_sky());
        let trigger = HeldKeys::default().with(FlightKey::Trigger);
        assert_eq!(s.step(trigger, 0), FrameOutcome::Running);
        assert!(s.takeoff());

        // Climb 5px/frame from y=520: y < 50 after 95 more frames (y=45).
        let mut now = 0;
        let mut end = None;
        for _ in 0..200 {
            now += 16;
            if let FrameOutcome::Ended(e) = s.step(HeldKeys::default(), now) {
                end = Some(e);
                break;
            }
        }
        let end = end.expect("climb should finish");
        assert_eq!(s.aircraft().y, 45);
        let secs = now / 1000;
        assert_eq!(
            end,
            SessionEnd::TookOff {
                elapsed_secs: secs,
                score: (1000 - secs as i64 * 100 + 600) as u64
            }
        );
        assert!(!s.collided());
    }

    #[test]
    fn success_at_y_49_after_five_seconds() {
        let mut cfg = GameConfig::default();
        cfg.climb_speed = 0;
        let mut s = Session::with_hazards(cfg, AircraftModel::Cessna172, Runway::A, &clear_sky(), 0)
            .unwrap();
        // Fly straight up to y = 50 without triggering: 94 frames.
        let up = HeldKeys::default().with(FlightKey::Up);
        for _ in 0..94 {
            assert_eq!(s.step(up, 100), FrameOutcome::Running);
        }
        assert_eq!(s.aircraft().y, 50);
        // Place it at 49 and trigger at t=5s.
        s.aircraft.y = 49;
        let out = s.step(HeldKeys::default().with(FlightKey::Trigger), 5_000);
        assert_eq!(
            out,
            FrameOutcome::Ended(SessionEnd::TookOff {
                elapsed_secs: 5,
                score: 1100
            })
        );
    }

    #[test]
    fn collision_during_climb_beats_success() {
        // Hazard sits on the climb path near the top.
        let mut s = session(&[hazard(HazardKind::Google, 400, 60)]);
        s.step(HeldKeys::default().with(FlightKey::Trigger), 0);
        let mut end = None;
        for i in 1..200u64 {
            if let FrameOutcome::Ended(e) = s.step(HeldKeys::default(), i * 16) {
                end = Some(e);
                break;
            }
        }
        assert_eq!(
            end,
            Some(SessionEnd::Crashed {
                kind: HazardKind::Google
            })
        );
    }

    #[test]
    fn quit_ends_without_outcome() {
        let mut s = session(&clear_sky());
        s.step(HeldKeys::default(), 16);
        s.quit();
        assert!(!s.running());
        assert_eq!(s.end(), Some(SessionEnd::Quit));
        assert_eq!(s.step(HeldKeys::default(), 32), FrameOutcome::Finished);
    }

    #[test]
    fn quit_after_crash_keeps_crash() {
        let mut s = session(&[hazard(HazardKind::Apple, 400, 535)]);
        s.step(HeldKeys::default(), 0);
        s.quit();
        assert_eq!(
            s.end(),
            Some(SessionEnd::Crashed {
                kind: HazardKind::Apple
            })
        );
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut s = session(&clear_sky());
        s.step(HeldKeys::default().with(FlightKey::Right), 2_500);
        let snap = s.snapshot(2_500);
        assert_eq!(snap.aircraft.x, 375);
        assert_eq!(snap.hazards.len(), 3);
        assert_eq!(snap.elapsed_secs, 2);
        assert!(snap.running);
        assert_eq!(snap.frame, 1);
    }
}
