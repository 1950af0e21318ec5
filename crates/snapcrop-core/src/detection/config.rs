use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DETECTION_BLUR_SIGMA, DEFAULT_DETECTION_CLOSING_RADIUS, DEFAULT_DETECTION_MIN_AREA,
    DEFAULT_TEXT_PADDING, MAX_DETECTION_BLUR_SIGMA, MAX_DETECTION_CLOSING_RADIUS,
};
use crate::error::{Result, SnapcropError};

/// Method used to separate ink from the page background.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Otsu's method: minimizes intra-class variance on a bimodal histogram.
    #[default]
    Otsu,
    /// User-specified fixed luminance threshold in [0.0, 1.0].
    Fixed(f32),
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Otsu => write!(f, "Otsu"),
            Self::Fixed(v) => write!(f, "Fixed ({v})"),
        }
    }
}

/// Text-region detection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Seed the crop box from detected text.
    #[serde(default = "default_true")]
    pub auto_detect: bool,
    /// Padding (image pixels) added around the union of text blocks.
    #[serde(default = "default_padding")]
    pub padding: f32,
    #[serde(default)]
    pub threshold_method: ThresholdMethod,
    /// Gaussian blur sigma for noise suppression before thresholding.
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
    /// Dilation radius that merges neighbouring glyphs into blocks.
    #[serde(default = "default_closing_radius")]
    pub closing_radius: usize,
    /// Minimum bounding-box area (pixels) of a text block.
    #[serde(default = "default_min_area")]
    pub min_area: usize,
}

fn default_true() -> bool {
    true
}
fn default_padding() -> f32 {
    DEFAULT_TEXT_PADDING
}
fn default_blur_sigma() -> f32 {
    DEFAULT_DETECTION_BLUR_SIGMA
}
fn default_closing_radius() -> usize {
    DEFAULT_DETECTION_CLOSING_RADIUS
}
fn default_min_area() -> usize {
    DEFAULT_DETECTION_MIN_AREA
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            auto_detect: true,
            padding: DEFAULT_TEXT_PADDING,
            threshold_method: ThresholdMethod::default(),
            blur_sigma: DEFAULT_DETECTION_BLUR_SIGMA,
            closing_radius: DEFAULT_DETECTION_CLOSING_RADIUS,
            min_area: DEFAULT_DETECTION_MIN_AREA,
        }
    }
}

impl DetectionConfig {
    /// Reject settings the ink detector cannot run with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SnapcropError::InvalidConfig(msg));

        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return invalid(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            ));
        }
        if !(0.0..=MAX_DETECTION_BLUR_SIGMA).contains(&self.blur_sigma) {
            return invalid(format!(
                "blur_sigma must be in [0, {MAX_DETECTION_BLUR_SIGMA}], got {}",
                self.blur_sigma
            ));
        }
        if self.closing_radius > MAX_DETECTION_CLOSING_RADIUS {
            return invalid(format!(
                "closing_radius must be at most {MAX_DETECTION_CLOSING_RADIUS}, got {}",
                self.closing_radius
            ));
        }
        if let ThresholdMethod::Fixed(v) = self.threshold_method {
            if !v.is_finite() {
                return invalid(format!("fixed threshold must be finite, got {v}"));
            }
        }
        Ok(())
    }
}
