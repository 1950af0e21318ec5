use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BOX_HEIGHT_FRACTION, DEFAULT_BOX_TOP_FRACTION, DEFAULT_BOX_WIDTH_FRACTION,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MIN_BOX_SIZE,
};
use crate::detection::DetectionConfig;
use crate::error::Result;
use crate::geometry::Viewport;

/// Top-level configuration, loadable from TOML. Every field has a default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Viewport for headless sessions; interactive hosts use their own surface.
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub crop: CropConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.detection.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_viewport_width")]
    pub width: f32,
    #[serde(default = "default_viewport_height")]
    pub height: f32,
}

fn default_viewport_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}
fn default_viewport_height() -> f32 {
    DEFAULT_VIEWPORT_HEIGHT
}

impl ViewportConfig {
    pub fn to_viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Crop box sizing rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CropConfig {
    /// Minimum side length in display units.
    #[serde(default = "default_min_box_size")]
    pub min_box_size: f32,
    /// Default box width as a fraction of the displayed image width.
    #[serde(default = "default_width_fraction")]
    pub default_width_fraction: f32,
    /// Default box height as a fraction of the displayed image height.
    #[serde(default = "default_height_fraction")]
    pub default_height_fraction: f32,
    /// Default box top, as a fraction of the displayed image height.
    #[serde(default = "default_top_fraction")]
    pub default_top_fraction: f32,
}

fn default_min_box_size() -> f32 {
    MIN_BOX_SIZE
}
fn default_width_fraction() -> f32 {
    DEFAULT_BOX_WIDTH_FRACTION
}
fn default_height_fraction() -> f32 {
    DEFAULT_BOX_HEIGHT_FRACTION
}
fn default_top_fraction() -> f32 {
    DEFAULT_BOX_TOP_FRACTION
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_box_size: MIN_BOX_SIZE,
            default_width_fraction: DEFAULT_BOX_WIDTH_FRACTION,
            default_height_fraction: DEFAULT_BOX_HEIGHT_FRACTION,
            default_top_fraction: DEFAULT_BOX_TOP_FRACTION,
        }
    }
}
