use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use crate::capture::load_luminance;
use crate::consts::MIN_INK_CONTRAST;
use crate::error::Result;
use crate::geometry::BoundingBox;

use super::blocks::enclose_blocks;
use super::blur::gaussian_blur;
use super::components::connected_components;
use super::config::DetectionConfig;
use super::morphology::dilate;
use super::threshold::split_ink;
use super::TextDetector;

/// Built-in text detector that looks for ink on a page.
///
/// Pipeline: Gaussian blur -> threshold -> dilation (merges glyphs into
/// blocks) -> connected components -> filter -> union with padding.
#[derive(Clone, Debug, Default)]
pub struct InkDetector {
    config: DetectionConfig,
}

impl InkDetector {
    /// Fails with `InvalidConfig` when the settings are out of range.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Text blocks found in a luminance image (values in [0.0, 1.0]), in
    /// pixel coordinates.
    pub fn detect_blocks(&self, luma: &Array2<f32>) -> Vec<BoundingBox> {
        let (h, w) = luma.dim();
        if h == 0 || w == 0 {
            return Vec::new();
        }

        let blurred = gaussian_blur(luma, self.config.blur_sigma);

        let split = split_ink(&blurred, &self.config.threshold_method);
        if split.contrast < MIN_INK_CONTRAST {
            debug!(contrast = split.contrast, "Image has no contrast, skipping ink detection");
            return Vec::new();
        }
        let ink = blurred.mapv(|v| split.is_ink(v));

        let radius = self.config.closing_radius;
        let merged = dilate(&ink, radius);

        let blocks: Vec<BoundingBox> = connected_components(&merged)
            .into_iter()
            .filter(|c| !c.touches_border(h, w))
            .filter_map(|c| {
                // Undo the dilation margin; border contact was excluded above,
                // so every side grew by exactly `radius`.
                let width = c.width().saturating_sub(2 * radius).max(1);
                let height = c.height().saturating_sub(2 * radius).max(1);
                (width * height >= self.config.min_area).then(|| {
                    BoundingBox::new(
                        (c.min_col + radius) as f32,
                        (c.min_row + radius) as f32,
                        width as f32,
                        height as f32,
                    )
                })
            })
            .collect();

        debug!(threshold = split.threshold, dark_ink = split.dark_ink, blocks = blocks.len(), "Ink detection complete");
        blocks
    }

    /// Padded union of all text blocks, or `None` when there is no text.
    pub fn detect_region(&self, luma: &Array2<f32>) -> Option<BoundingBox> {
        enclose_blocks(&self.detect_blocks(luma), self.config.padding)
    }
}

impl TextDetector for InkDetector {
    fn recognize_region(&self, image_uri: &str) -> Result<Option<BoundingBox>> {
        let luma = load_luminance(Path::new(image_uri))?;
        Ok(self.detect_region(&luma))
    }
}
