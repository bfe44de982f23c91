//! Image assets.
//!
//! Each entity looks for `<dir>/<name lowercased, spaces as underscores>.png`.
//! A missing or unreadable file is not fatal: the load result is kept as-is
//! and the scene painter picks the fallback drawing from the error.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::GameConfig;
use crate::types::{AircraftModel, HazardKind, Rgba, Sprite};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot scale {} to an empty size", .0.display())]
    EmptySize(PathBuf),
}

/// `<dir>/<stem>.png`
pub fn asset_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.png"))
}

/// Load an image and scale it to `width` x `height` (nearest neighbor).
pub fn load_image(path: &Path, width: u32, height: u32) -> Result<Sprite, AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::EmptySize(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let scaled = imageops::resize(&img.to_rgba8(), width, height, FilterType::Nearest);
    let pixels = scaled
        .pixels()
        .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
        .collect();

    Sprite::from_pixels(width, height, pixels).ok_or_else(|| AssetError::EmptySize(path.to_path_buf()))
}

/// Load results for one session's entities.
#[derive(Debug)]
pub struct SpriteSet {
    aircraft: Result<Sprite, AssetError>,
    hazards: [Result<Sprite, AssetError>; 6],
}

impl SpriteSet {
    /// Load the aircraft image and every hazard kind's image from `dir`.
    pub fn load(dir: &Path, model: AircraftModel, config: &GameConfig) -> Self {
        let aircraft = load_logged(
            dir,
            &model.asset_stem(),
            config.aircraft.width.max(0) as u32,
            config.aircraft.height.max(0) as u32,
        );
        let size = (config.hazards.radius.max(0) * 2) as u32;
        let hazards = HazardKind::ALL.map(|kind| load_logged(dir, &kind.asset_stem(), size, size));
        Self { aircraft, hazards }
    }

    /// A set where every image is missing (pure fallback drawing).
    pub fn missing() -> Self {
        Self {
            aircraft: Err(AssetError::NotFound(PathBuf::new())),
            hazards: HazardKind::ALL
                .map(|kind| Err(AssetError::NotFound(PathBuf::from(kind.asset_stem())))),
        }
    }

    pub fn aircraft(&self) -> Result<&Sprite, &AssetError> {
        self.aircraft.as_ref()
    }

    pub fn hazard(&self, kind: HazardKind) -> Result<&Sprite, &AssetError> {
        self.hazards[kind.index()].as_ref()
    }
}

fn load_logged(dir: &Path, stem: &str, width: u32, height: u32) -> Result<Sprite, AssetError> {
    let path = asset_path(dir, stem);
    let result = load_image(&path, width, height);
    match &result {
        Ok(_) => debug!(path = %path.display(), "loaded image"),
        Err(err) => warn!(%err, "image unavailable, using fallback drawing"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, w: u32, h: u32) {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn asset_path_uses_stem() {
        let p = asset_path(Path::new("resources"), &AircraftModel::Boeing737.asset_stem());
        assert_eq!(p, PathBuf::from("resources/boeing_737.png"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("apple.png"), 48, 48).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tesla.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = load_image(&path, 48, 48).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn image_is_scaled_to_entity_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cessna_172.png");
        write_png(&path, 7, 3);
        let sprite = load_image(&path, 60, 30).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (60, 30));
        assert_eq!(sprite.pixel(59, 29), Some(Rgba::new(10, 20, 30, 255)));
    }

    #[test]
    fn sprite_set_mixes_loaded_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("airbus_a320.png"), 4, 2);
        write_png(&dir.path().join("police.png"), 2, 2);

        let set = SpriteSet::load(dir.path(), AircraftModel::AirbusA320, &GameConfig::default());
        assert_eq!(set.aircraft().unwrap().width(), 60);
        assert_eq!(set.hazard(HazardKind::Police).unwrap().height(), 48);
        assert!(matches!(
            set.hazard(HazardKind::Apple),
            Err(AssetError::NotFound(_))
        ));
    }
}
