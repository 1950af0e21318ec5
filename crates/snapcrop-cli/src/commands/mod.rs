pub mod config;
pub mod crop;
pub mod detect;
pub mod info;
pub mod subjects;

use std::path::Path;

use anyhow::{Context, Result};
use snapcrop_core::config::AppConfig;
use snapcrop_core::geometry::Viewport;

/// Load the config file if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Parse a `WIDTHxHEIGHT` viewport, e.g. `390x844`.
pub fn parse_viewport(s: &str) -> std::result::Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: f32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Viewport::new(width, height).map_err(|e| e.to_string())
}

/// Viewport from the command line, falling back to the config.
pub fn resolve_viewport(arg: Option<Viewport>, config: &AppConfig) -> Result<Viewport> {
    match arg {
        Some(viewport) => Ok(viewport),
        None => Ok(config.viewport.to_viewport()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        let v = parse_viewport("390x844").unwrap();
        assert_eq!((v.width, v.height), (390.0, 844.0));
        let v = parse_viewport("1000X2000").unwrap();
        assert_eq!((v.width, v.height), (1000.0, 2000.0));
        assert!(parse_viewport("390").is_err());
        assert!(parse_viewport("0x844").is_err());
        assert!(parse_viewport("ax844").is_err());
    }
}
