pub mod blocks;
pub mod blur;
pub mod components;
pub mod config;
pub mod ink;
pub mod morphology;
pub mod threshold;

use tracing::{info, warn};

use crate::error::Result;
use crate::geometry::BoundingBox;

pub use blocks::enclose_blocks;
pub use config::{DetectionConfig, ThresholdMethod};
pub use ink::InkDetector;

/// Locates the text region of an image, in image pixel coordinates.
pub trait TextDetector: Send + Sync {
    /// `Ok(None)` when the image holds no text.
    fn recognize_region(&self, image_uri: &str) -> Result<Option<BoundingBox>>;
}

/// Detector for hosts without text recognition: never finds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDetector;

impl TextDetector for NullDetector {
    fn recognize_region(&self, _image_uri: &str) -> Result<Option<BoundingBox>> {
        Ok(None)
    }
}

/// Collapse a detection result to the region used for seeding a crop.
/// A failure counts the same as finding no text.
pub fn region_or_none(result: Result<Option<BoundingBox>>) -> Option<BoundingBox> {
    match result {
        Ok(Some(region)) => {
            info!(?region, "Text region detected");
            Some(region)
        }
        Ok(None) => {
            info!("No text detected");
            None
        }
        Err(e) => {
            warn!(error = %e, "Text detection failed, using default crop");
            None
        }
    }
}
