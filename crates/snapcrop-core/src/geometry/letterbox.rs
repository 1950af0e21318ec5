use super::types::{DisplayMetrics, ImageMetrics, Viewport};

/// Fit `image` inside `viewport`, preserving aspect ratio and centering it.
///
/// A relatively wider image fills the viewport width and is centered
/// vertically; otherwise it fills the height and is centered horizontally.
pub fn compute_display_metrics(image: &ImageMetrics, viewport: &Viewport) -> DisplayMetrics {
    let image_aspect = image.aspect();

    if image_aspect > viewport.aspect() {
        let display_width = viewport.width;
        let display_height = display_width / image_aspect;
        DisplayMetrics {
            display_width,
            display_height,
            offset_x: 0.0,
            offset_y: (viewport.height - display_height) / 2.0,
        }
    } else {
        let display_height = viewport.height;
        let display_width = display_height * image_aspect;
        DisplayMetrics {
            display_width,
            display_height,
            offset_x: (viewport.width - display_width) / 2.0,
            offset_y: 0.0,
        }
    }
}
