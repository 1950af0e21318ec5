use tracing::debug;

use crate::config::CropConfig;
use crate::geometry::{image_to_display, BoundingBox, CropRect, DisplayMetrics, ImageMetrics, Viewport};

use super::state::CropBox;

/// Where the initial crop rect came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropSeed {
    /// Mapped from a detected text region.
    Detected,
    /// The default rect over the middle of the displayed image.
    Default,
}

/// Default rect: centered horizontally in the displayed image, sized as a
/// fraction of it, with its top a fixed fraction below the image top.
pub fn default_rect(display: &DisplayMetrics, config: &CropConfig) -> CropRect {
    let width = display.display_width * config.default_width_fraction;
    let height = display.display_height * config.default_height_fraction;
    CropRect {
        left: display.offset_x + (display.display_width - width) / 2.0,
        top: display.offset_y + display.display_height * config.default_top_fraction,
        width,
        height,
    }
}

/// Pick the unclamped starting rect: the mapped detection when present,
/// otherwise the default rect.
pub fn seed_rect(
    display: &DisplayMetrics,
    image: &ImageMetrics,
    detected: Option<&BoundingBox>,
    config: &CropConfig,
) -> (CropRect, CropSeed) {
    match detected {
        Some(region) => (image_to_display(region, display, image), CropSeed::Detected),
        None => (default_rect(display, config), CropSeed::Default),
    }
}

/// Build the crop box for a freshly loaded image.
pub fn initialize(
    display: &DisplayMetrics,
    image: &ImageMetrics,
    viewport: Viewport,
    detected: Option<&BoundingBox>,
    config: &CropConfig,
) -> (CropBox, CropSeed) {
    let (rect, seed) = seed_rect(display, image, detected, config);
    let crop = CropBox::new(rect, viewport, config.min_box_size);
    debug!(?seed, seeded = ?rect, clamped = ?crop.rect(), "Crop box initialized");
    (crop, seed)
}
