//! Loop driver - menus, the fixed-rate session loop and outcome screens
//!
//! Everything here is single-threaded. The only waits are the frame-pacing
//! sleep, the menu input poll and the outcome pause, all on the caller's
//! thread. Quit is checked once per frame.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::assets::SpriteSet;
use crate::clock::{Clock, FramePacer};
use crate::core::{FrameOutcome, GameConfig, Menu, MenuStep, RandomSource, Session, SessionEnd};
use crate::input::InputSource;
use crate::scene::{paint_crash, paint_menu, paint_session, paint_success};
use crate::surface::Surface;
use crate::types::{AircraftModel, Runway, CAPTION};

/// How long a menu waits for input before redrawing.
pub const MENU_POLL: Duration = Duration::from_millis(50);

/// Show a menu until an entry is confirmed. `None` means quit.
pub fn run_menu(
    surface: &mut impl Surface,
    input: &mut impl InputSource,
    title: &str,
    options: &[&str],
) -> Result<Option<usize>> {
    let mut menu = Menu::new(options.len());
    loop {
        paint_menu(surface, title, options, menu.selected());
        surface.present()?;

        let Some(event) = input.next_menu_event(MENU_POLL)? else {
            continue;
        };
        match menu.apply(event) {
            MenuStep::Selected(i) => return Ok(Some(i)),
            MenuStep::Quit => return Ok(None),
            MenuStep::Moved(_) => {}
        }
    }
}

/// Run a session to its end.
///
/// Per frame: pace, poll input (quit ends at once, with no outcome screen),
/// step the session, then redraw while still running. A crash or success is
/// painted over the last frame and held for the configured duration.
pub fn run_session(
    session: &mut Session,
    sprites: &SpriteSet,
    surface: &mut impl Surface,
    input: &mut impl InputSource,
    clock: &mut impl Clock,
) -> Result<SessionEnd> {
    let config = *session.config();
    let mut pacer = FramePacer::new(config.screen.fps);

    info!(
        aircraft = session.aircraft().name(),
        runway = session.runway().name(),
        "session started"
    );
    for h in session.hazards() {
        debug!(kind = h.kind.name(), x = h.x, y = h.y, "hazard placed");
    }

    loop {
        pacer.tick(clock);

        let frame = input.poll_frame()?;
        if frame.quit {
            session.quit();
            info!("quit during session");
            return Ok(SessionEnd::Quit);
        }

        let was_takeoff = session.takeoff();
        let now = clock.now_ms();
        let outcome = session.step(frame.keys, now);
        if !was_takeoff && session.takeoff() {
            info!(
                x = session.aircraft().x,
                y = session.aircraft().y,
                "takeoff started"
            );
        }

        match outcome {
            FrameOutcome::Running => {
                paint_session(surface, &session.snapshot(now), sprites, &config);
                surface.present()?;
            }
            FrameOutcome::Ended(end) => {
                paint_session(surface, &session.snapshot(now), sprites, &config);
                show_outcome(end, &config, surface, clock)?;
                return Ok(end);
            }
            FrameOutcome::Finished => {
                return Ok(session.end().unwrap_or(SessionEnd::Quit));
            }
        }
    }
}

fn show_outcome(
    end: SessionEnd,
    config: &GameConfig,
    surface: &mut impl Surface,
    clock: &mut impl Clock,
) -> Result<()> {
    let hold_ms = match end {
        SessionEnd::Crashed { kind } => {
            info!(hazard = kind.name(), "crashed");
            paint_crash(surface, kind);
            config.crash_display_ms
        }
        SessionEnd::TookOff {
            elapsed_secs,
            score,
        } => {
            info!(elapsed_secs, score, "takeoff success");
            paint_success(surface, elapsed_secs, score);
            config.success_display_ms
        }
        SessionEnd::Quit => return Ok(()),
    };
    surface.present()?;
    clock.sleep(Duration::from_millis(hold_ms));
    Ok(())
}

/// Every session played until the player quit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayReport {
    pub sessions: Vec<SessionEnd>,
}

/// Where images are loaded from.
pub trait SpriteSource {
    fn sprites_for(&mut self, model: AircraftModel, config: &GameConfig) -> SpriteSet;
}

impl SpriteSource for &Path {
    fn sprites_for(&mut self, model: AircraftModel, config: &GameConfig) -> SpriteSet {
        SpriteSet::load(*self, model, config)
    }
}

/// Full flow: aircraft menu, runway menu, session, outcome, "fly again"
/// menu, repeated until the player quits.
pub fn play(
    config: &GameConfig,
    mut sprites: impl SpriteSource,
    surface: &mut impl Surface,
    input: &mut impl InputSource,
    clock: &mut impl Clock,
    rng: &mut impl RandomSource,
) -> Result<PlayReport> {
    config.validate()?;
    surface.set_caption(CAPTION)?;

    let aircraft_names = AircraftModel::ALL.map(|m| m.name());
    let runway_names = Runway::ALL.map(|r| r.name());
    let mut report = PlayReport::default();

    loop {
        let Some(a) = run_menu(surface, input, "Select Aircraft", &aircraft_names)? else {
            return Ok(report);
        };
        let Some(r) = run_menu(surface, input, "Select Runway", &runway_names)? else {
            return Ok(report);
        };
        let model = AircraftModel::ALL[a];
        let runway = Runway::ALL[r];

        let set = sprites.sprites_for(model, config);
        let mut session = Session::new(*config, model, runway, rng, clock.now_ms())?;
        let end = run_session(&mut session, &set, surface, input, clock)?;
        report.sessions.push(end);

        if end == SessionEnd::Quit {
            return Ok(report);
        }
        match run_menu(surface, input, "Fly Again?", &["Fly again", "Quit"])? {
            Some(0) => continue,
            _ => return Ok(report),
        }
    }
}
