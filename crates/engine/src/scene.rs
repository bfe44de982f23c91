//! Scene painting: turns game state into draw calls on a [`Surface`].
//!
//! Layout is expressed in world pixels relative to the configured screen size.

use crate::assets::SpriteSet;
use crate::core::{GameConfig, Hazard, SessionSnapshot};
use crate::surface::{palette, Surface};
use crate::types::{HazardKind, Point, Rect};

const AIRPORT: &str = "Haneda Airport";
const HELP: &str = "Arrow keys: Move | SPACE: Takeoff";

/// A selection menu: white background, title, options with the highlighted
/// one in blue.
pub fn paint_menu(surface: &mut impl Surface, title: &str, options: &[&str], selected: usize) {
    surface.clear(palette::WHITE);
    surface.draw_text(title, 48, Point::new(220, 100), palette::BLACK);
    for (i, option) in options.iter().enumerate() {
        let color = if i == selected {
            palette::BLUE
        } else {
            palette::BLACK
        };
        surface.draw_text(option, 36, Point::new(250, 200 + i as i32 * 50), color);
    }
}

/// One gameplay frame: sky, runway, hazards, aircraft, HUD.
pub fn paint_session(
    surface: &mut impl Surface,
    snap: &SessionSnapshot,
    sprites: &SpriteSet,
    config: &GameConfig,
) {
    let w = config.screen.width;
    let h = config.screen.height;

    surface.clear(palette::SKY);

    surface.fill_rect(Rect::new(100, h - 100, w - 200, 80), palette::GRAY);
    let label = format!("{AIRPORT} - {}", snap.runway.name());
    surface.draw_text(&label, 32, Point::new(300, h - 60), palette::BLACK);

    for hazard in &snap.hazards {
        paint_hazard(surface, hazard, sprites);
    }

    // No image, no aircraft on screen.
    if let Ok(sprite) = sprites.aircraft() {
        surface.draw_image(sprite, snap.aircraft.position());
    }

    let timer = format!("Time: {}s", snap.elapsed_secs);
    surface.draw_text(&timer, 24, Point::new(w - 150, 10), palette::BLACK);
    surface.draw_text(HELP, 24, Point::new(10, 10), palette::BLACK);
}

fn paint_hazard(surface: &mut impl Surface, hazard: &Hazard, sprites: &SpriteSet) {
    match sprites.hazard(hazard.kind) {
        Ok(sprite) => {
            let b = hazard.bounds();
            surface.draw_image(sprite, Point::new(b.x, b.y));
        }
        Err(_) => {
            surface.fill_circle(hazard.center(), hazard.radius, palette::RED);
            let mut buf = [0u8; 4];
            let letter = hazard.kind.initial().encode_utf8(&mut buf);
            surface.draw_text(
                letter,
                20,
                Point::new(hazard.x - 8, hazard.y - 10),
                palette::WHITE,
            );
        }
    }
}

/// Crash overlay, drawn over the last gameplay frame.
pub fn paint_crash(surface: &mut impl Surface, kind: HazardKind) {
    let text = format!("Game Over! Hit: {}", kind.name());
    surface.draw_text(&text, 48, Point::new(180, 250), palette::RED);
}

/// Success overlay, drawn over the last gameplay frame.
pub fn paint_success(surface: &mut impl Surface, elapsed_secs: u64, score: u64) {
    surface.draw_text("Takeoff Success!", 48, Point::new(180, 220), palette::GREEN);
    surface.draw_text(
        &format!("Time: {elapsed_secs}s"),
        36,
        Point::new(250, 300),
        palette::BLACK,
    );
    surface.draw_text(
        &format!("Score: {score}"),
        36,
        Point::new(250, 350),
        palette::BLUE,
    );
}
