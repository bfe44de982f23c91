//! Config file loading.
//!
//! The file is JSON; every field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::GameConfig;

/// Load and validate a config. `None` gives the defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let config = match path {
        None => GameConfig::default(),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in config {}", path.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}

/// Parse config JSON without validating it.
pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let config = parse_config(r#"{ "climb_speed": 0, "hazards": { "count": 5 } }"#).unwrap();
        assert_eq!(config.climb_speed, 0);
        assert_eq!(config.hazards.count, 5);
        assert_eq!(config.hazards.radius, 24);
        assert_eq!(config.screen.width, 800);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config("{ climb_speed: ").is_err());
    }
}
