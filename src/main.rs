//! Airplane Takeoff Adventure (default binary).
//!
//! Pick an aircraft and a runway, dodge the hazards on the apron and take
//! off. Renders with crossterm into a half-block framebuffer; logs go to a
//! file since the terminal is in raw mode.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_takeoff::config::load_config;
use tui_takeoff::core::{GameConfig, SimpleRng};
use tui_takeoff::engine::{play, PlayReport, SystemClock};
use tui_takeoff::input::CrosstermInput;
use tui_takeoff::term::{TerminalRenderer, TerminalSurface};

#[derive(Parser, Debug)]
#[command(name = "tui-takeoff")]
#[command(about = "Airplane Takeoff Adventure in the terminal", long_about = None)]
struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the hazard layout (random if omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Directory holding the aircraft and hazard images
    #[arg(long, default_value = "resources")]
    assets: PathBuf,

    #[arg(long, default_value = "tui-takeoff.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        width = config.screen.width,
        height = config.screen.height,
        hazards = config.hazards.count,
        climb_speed = config.climb_speed,
        "starting"
    );

    let mut renderer = TerminalRenderer::new();
    let release_events = renderer.enter()?;
    let mut surface = TerminalSurface::new(config.screen.width, config.screen.height, renderer);

    let result = run(&config, &cli.assets, seed, release_events, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.renderer_mut().exit();

    let report = result?;
    info!(sessions = report.sessions.len(), "exiting");
    Ok(())
}

fn run(
    config: &GameConfig,
    assets: &Path,
    seed: u32,
    release_events: bool,
    surface: &mut TerminalSurface,
) -> Result<PlayReport> {
    let mut input = CrosstermInput::new(release_events);
    let mut clock = SystemClock::new();
    let mut rng = SimpleRng::new(seed);
    play(config, assets, surface, &mut input, &mut clock, &mut rng)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
