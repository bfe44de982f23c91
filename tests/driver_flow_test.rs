//! End-to-end flow through the loop driver with in-memory collaborators

use std::path::Path;
use std::time::Duration;

use tui_takeoff::core::{GameConfig, Hazard, Session, SessionEnd, SimpleRng};
use tui_takeoff::engine::{
    play, run_session, DrawOp, ManualClock, RecordingSurface, ScriptedInput, SpriteSet,
};
use tui_takeoff::term::CanvasSurface;
use tui_takeoff::types::{AircraftModel, FlightKey, HazardKind, HeldKeys, MenuEvent, Runway, CAPTION};

fn write_png(dir: &Path, stem: &str, rgba: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(8, 4, image::Rgba(rgba));
    img.save(dir.join(format!("{stem}.png"))).unwrap();
}

#[test]
fn test_play_loads_assets_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "boeing_737", [200, 0, 0, 255]);

    let mut surface = RecordingSurface::new();
    let mut input = ScriptedInput::new()
        .menu_events([MenuEvent::Confirm, MenuEvent::Confirm])
        .hold(HeldKeys::default(), 1)
        .quit();
    let mut clock = ManualClock::new(0);

    let report = play(
        &GameConfig::default(),
        dir.path(),
        &mut surface,
        &mut input,
        &mut clock,
        &mut SimpleRng::new(5),
    )
    .unwrap();

    assert_eq!(report.sessions, vec![SessionEnd::Quit]);
    // Aircraft image scaled to 60x30; every hazard falls back to a circle.
    assert!(surface.ops().contains(&DrawOp::Image {
        top_left: tui_takeoff::types::Point::new(370, 520),
        width: 60,
        height: 30,
    }));
    let circles = surface
        .last_frame()
        .iter()
        .filter(|op| matches!(op, DrawOp::Circle(..)))
        .count();
    assert_eq!(circles, 3);
}

#[test]
fn test_quit_from_first_menu_plays_nothing() {
    let mut surface = RecordingSurface::new();
    let mut input = ScriptedInput::new().menu_events([MenuEvent::Quit]);
    let report = play(
        &GameConfig::default(),
        Path::new("does-not-exist"),
        &mut surface,
        &mut input,
        &mut ManualClock::new(0),
        &mut SimpleRng::new(1),
    )
    .unwrap();

    assert!(report.sessions.is_empty());
    assert_eq!(input.frames_polled(), 0);
    assert_eq!(surface.ops()[0], DrawOp::Caption(CAPTION.to_string()));
}

#[test]
fn test_invalid_config_is_rejected_before_drawing() {
    let mut config = GameConfig::default();
    config.hazards.count = 0;
    let mut surface = RecordingSurface::new();
    let err = play(
        &config,
        Path::new("resources"),
        &mut surface,
        &mut ScriptedInput::new(),
        &mut ManualClock::new(0),
        &mut SimpleRng::new(1),
    )
    .unwrap_err();

    assert!(err.to_string().contains("hazard count"), "{err}");
    assert!(surface.ops().is_empty());
}

#[test]
fn test_crash_frame_renders_on_terminal_canvas() {
    let hazards = [Hazard::new(HazardKind::Tesla, 400, 500, 24)];
    let mut session = Session::with_hazards(
        GameConfig::default(),
        AircraftModel::Cessna172,
        Runway::B,
        &hazards,
        0,
    )
    .unwrap();
    let mut surface = CanvasSurface::new(800, 600, 80, 30);
    let mut input = ScriptedInput::new().hold(HeldKeys::default().with(FlightKey::Up), 1);
    let mut clock = ManualClock::new(0);

    let end = run_session(
        &mut session,
        &SpriteSet::missing(),
        &mut surface,
        &mut input,
        &mut clock,
    )
    .unwrap();

    assert_eq!(
        end,
        SessionEnd::Crashed {
            kind: HazardKind::Tesla
        }
    );
    assert_eq!(clock.slept(), &[Duration::from_millis(2000)]);

    let frame = surface.frame();
    // Crash text at (180, 250) lands on row 12, column 18.
    assert!(frame.row_text(12)[18..].starts_with("Game Over! Hit: Tesla"));
    assert!(frame.get(18, 12).unwrap().style.bold);
    assert!(frame.row_text(27).contains("Haneda Airport - Runway B"));
}
