/// Minimum crop box side length, in display units.
pub const MIN_BOX_SIZE: f32 = 80.0;

/// Default crop box width as a fraction of the displayed image width.
pub const DEFAULT_BOX_WIDTH_FRACTION: f32 = 0.8;

/// Default crop box height as a fraction of the displayed image height.
pub const DEFAULT_BOX_HEIGHT_FRACTION: f32 = 0.3;

/// Default crop box top edge, as a fraction of the displayed image height
/// below the image's top offset.
pub const DEFAULT_BOX_TOP_FRACTION: f32 = 0.35;

/// Side length of the square touch target centered on each corner handle.
pub const HANDLE_SIZE: f32 = 24.0;

/// Padding (image pixels) added around the union of detected text blocks.
pub const DEFAULT_TEXT_PADDING: f32 = 20.0;

/// Viewport used when no display surface is available (a portrait phone screen).
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 390.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 844.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Default Gaussian blur sigma applied before ink thresholding.
pub const DEFAULT_DETECTION_BLUR_SIGMA: f32 = 1.0;

/// Default radius of the square dilation that merges glyphs into text blocks.
pub const DEFAULT_DETECTION_CLOSING_RADIUS: usize = 4;

/// Default minimum bounding-box area (pixels) for a text block.
pub const DEFAULT_DETECTION_MIN_AREA: usize = 24;

/// Largest accepted blur sigma; the kernel spans `6 * sigma + 1` taps.
pub const MAX_DETECTION_BLUR_SIGMA: f32 = 25.0;

/// Largest accepted dilation radius (pixels).
pub const MAX_DETECTION_CLOSING_RADIUS: usize = 64;

/// ITU-R BT.601 luminance coefficients.
pub const LUMINANCE_R: f32 = 0.299;
pub const LUMINANCE_G: f32 = 0.587;
pub const LUMINANCE_B: f32 = 0.114;

/// Fraction of the remaining distance covered per step of a crop box transition.
pub const DEFAULT_TRANSITION_RATE: f32 = 0.25;

/// Distance (display units) below which a transition snaps to its target.
pub const TRANSITION_SNAP_DISTANCE: f32 = 0.5;

/// Luminance standard deviation below which an image is treated as blank
/// and ink detection is skipped.
pub const MIN_INK_CONTRAST: f64 = 0.02;
