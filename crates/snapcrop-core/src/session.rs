use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::CropConfig;
use crate::crop::{initialize, CropBox, CropSeed, CropView, DragController, Handle};
use crate::detection::{region_or_none, TextDetector};
use crate::error::{Result, SnapcropError};
use crate::geometry::{
    compute_display_metrics, display_to_image, BoundingBox, CropRect, DisplayMetrics,
    ImageMetrics, Viewport,
};

/// What the crop screen passes to the next stage on confirmation.
///
/// Coordinates are in display space, not image pixels; use
/// [`CropHandoff::to_image_space`] when pixel coordinates are needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropHandoff {
    pub image_uri: String,
    pub crop_left: f32,
    pub crop_top: f32,
    pub crop_width: f32,
    pub crop_height: f32,
}

impl CropHandoff {
    pub fn rect(&self) -> CropRect {
        CropRect::new(self.crop_left, self.crop_top, self.crop_width, self.crop_height)
    }

    pub fn to_image_space(&self, display: &DisplayMetrics, image: &ImageMetrics) -> BoundingBox {
        display_to_image(&self.rect(), display, image)
    }
}

/// Identifies one detection request. Results carrying an outdated ticket
/// are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionTicket {
    generation: u64,
}

impl DetectionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No image was supplied. Terminal.
    MissingInput,
    /// Waiting for the image's pixel dimensions.
    Loading,
    /// Waiting for text detection; no crop box exists yet.
    Detecting(DetectionTicket),
    /// Crop box initialized and interactive.
    Ready,
    /// Handoff emitted.
    Confirmed,
    /// The screen went away; late results are ignored.
    Unmounted,
}

#[derive(Clone, Copy, Debug)]
struct Layout {
    image: ImageMetrics,
    display: DisplayMetrics,
}

/// State machine for the crop screen:
/// `Loading -> [Detecting] -> Ready -> Confirmed`, or `MissingInput`.
///
/// Owns the crop box and the per-handle drag controllers; it is the only
/// path through which the crop box is written.
pub struct CropScreen {
    image_uri: Option<String>,
    auto_detect: bool,
    viewport: Viewport,
    config: CropConfig,
    generation: u64,
    phase: Phase,
    layout: Option<Layout>,
    crop: Option<CropBox>,
    seed: Option<CropSeed>,
    controllers: [DragController; 5],
}

impl CropScreen {
    pub fn new(
        image_uri: Option<String>,
        auto_detect: bool,
        viewport: Viewport,
        config: CropConfig,
    ) -> Self {
        let mut screen = Self::idle(auto_detect, viewport, config);
        screen.image_uri = image_uri.filter(|uri| !uri.is_empty());
        if screen.image_uri.is_some() {
            screen.phase = Phase::Loading;
        } else {
            warn!("Crop screen opened without an image");
        }
        screen
    }

    /// A screen with no image yet, for hosts that pick the photo later
    /// through [`CropScreen::retake`].
    pub fn idle(auto_detect: bool, viewport: Viewport, config: CropConfig) -> Self {
        Self {
            image_uri: None,
            auto_detect,
            viewport,
            config,
            generation: 0,
            phase: Phase::MissingInput,
            layout: None,
            crop: None,
            seed: None,
            controllers: Handle::ALL.map(DragController::new),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Detecting(_))
    }

    /// The image URI, or `MissingInput`.
    pub fn image_uri(&self) -> Result<&str> {
        self.image_uri.as_deref().ok_or(SnapcropError::MissingInput)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn image_metrics(&self) -> Option<ImageMetrics> {
        self.layout.map(|l| l.image)
    }

    pub fn display_metrics(&self) -> Option<DisplayMetrics> {
        self.layout.map(|l| l.display)
    }

    pub fn seed(&self) -> Option<CropSeed> {
        self.seed
    }

    pub fn crop_box(&self) -> Option<&CropBox> {
        self.crop.as_ref()
    }

    pub fn crop_view(&self) -> Option<CropView> {
        self.crop.as_ref().map(CropBox::view)
    }

    /// The image finished loading. Returns a ticket when detection must run
    /// before the crop box can be created; otherwise the box is created now.
    pub fn image_loaded(&mut self, image: ImageMetrics) -> Result<Option<DetectionTicket>> {
        self.image_uri()?;
        if self.phase != Phase::Loading {
            return Err(SnapcropError::InvalidState(format!(
                "image loaded while {:?}",
                self.phase
            )));
        }

        let metrics = compute_display_metrics(&image, &self.viewport);
        debug!(?image, ?metrics, "Image laid out");
        self.layout = Some(Layout {
            image,
            display: metrics,
        });

        if self.auto_detect {
            let ticket = DetectionTicket {
                generation: self.generation,
            };
            self.phase = Phase::Detecting(ticket);
            Ok(Some(ticket))
        } else {
            self.init_crop(None);
            Ok(None)
        }
    }

    /// Deliver a detection result. A failed detection falls back to the
    /// default rect. Returns false when the result is stale and was dropped.
    pub fn detection_finished(
        &mut self,
        ticket: DetectionTicket,
        result: Result<Option<BoundingBox>>,
    ) -> bool {
        if self.phase != Phase::Detecting(ticket) || ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                phase = ?self.phase,
                "Dropping stale detection result"
            );
            return false;
        }

        let region = region_or_none(result);
        self.init_crop(region.as_ref());
        true
    }

    /// Run `detector` synchronously for `ticket` and apply the result.
    pub fn run_detection(&mut self, ticket: DetectionTicket, detector: &dyn TextDetector) -> Result<bool> {
        let uri = self.image_uri()?.to_owned();
        let result = detector.recognize_region(&uri);
        Ok(self.detection_finished(ticket, result))
    }

    fn init_crop(&mut self, region: Option<&BoundingBox>) {
        let Some(layout) = self.layout else {
            return;
        };
        let (crop, seed) = initialize(
            &layout.display,
            &layout.image,
            self.viewport,
            region,
            &self.config,
        );
        info!(?seed, rect = ?crop.rect(), "Crop ready");
        self.crop = Some(crop);
        self.seed = Some(seed);
        self.phase = Phase::Ready;
    }

    fn controller(&mut self, handle: Handle) -> &mut DragController {
        &mut self.controllers[handle.index()]
    }

    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.controllers[handle.index()].is_dragging()
    }

    /// Start a gesture on `handle`. Ignored unless the crop box is ready.
    pub fn begin_drag(&mut self, handle: Handle) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        let Some(crop) = self.crop.as_ref() else {
            return false;
        };
        self.controllers[handle.index()].on_start(crop);
        true
    }

    /// Feed the cumulative translation since the gesture on `handle` began.
    pub fn update_drag(&mut self, handle: Handle, tx: f32, ty: f32) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        let Some(crop) = self.crop.as_mut() else {
            return false;
        };
        self.controllers[handle.index()].on_update(crop, tx, ty)
    }

    pub fn end_drag(&mut self, handle: Handle) {
        self.controller(handle).on_end();
    }

    pub fn cancel_drag(&mut self, handle: Handle) {
        self.controller(handle).on_cancel();
    }

    /// Emit the handoff for the current crop box.
    pub fn confirm(&mut self) -> Result<CropHandoff> {
        let image_uri = self.image_uri()?.to_owned();
        let rect = match (&self.phase, &self.crop) {
            (Phase::Ready, Some(crop)) => crop.rect(),
            (phase, _) => {
                return Err(SnapcropError::InvalidState(format!(
                    "cannot confirm while {phase:?}"
                )))
            }
        };

        for controller in &mut self.controllers {
            controller.on_end();
        }
        self.phase = Phase::Confirmed;

        let handoff = CropHandoff {
            image_uri,
            crop_left: rect.left,
            crop_top: rect.top,
            crop_width: rect.width,
            crop_height: rect.height,
        };
        info!(?handoff, "Crop confirmed");
        Ok(handoff)
    }

    /// Whether the next loaded image waits for text detection.
    pub fn set_auto_detect(&mut self, auto_detect: bool) {
        self.auto_detect = auto_detect;
    }

    /// Sizing rules for the next crop box; the current one is unaffected.
    pub fn set_crop_config(&mut self, config: CropConfig) {
        self.config = config;
    }

    /// Start over with another image. Tickets issued before the retake stay
    /// stale even though the screen is reused.
    pub fn retake(&mut self, image_uri: Option<String>, viewport: Viewport) {
        self.unmount();
        self.image_uri = image_uri.filter(|uri| !uri.is_empty());
        self.phase = if self.image_uri.is_some() {
            Phase::Loading
        } else {
            Phase::MissingInput
        };
        self.viewport = viewport;
        self.layout = None;
        self.seed = None;
    }

    /// Leave the screen. Outstanding detection tickets become stale.
    pub fn unmount(&mut self) {
        self.generation += 1;
        for controller in &mut self.controllers {
            controller.on_cancel();
        }
        if self.phase != Phase::MissingInput {
            self.phase = Phase::Unmounted;
        }
        self.crop = None;
        debug!(generation = self.generation, "Crop screen unmounted");
    }
}
