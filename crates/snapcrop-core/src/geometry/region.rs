use super::types::{BoundingBox, CropRect, DisplayMetrics, ImageMetrics};

fn scales(display: &DisplayMetrics, image: &ImageMetrics) -> (f32, f32) {
    (
        display.display_width / image.width as f32,
        display.display_height / image.height as f32,
    )
}

/// Map an image-space box into display space. Linear, no clamping.
pub fn image_to_display(
    region: &BoundingBox,
    display: &DisplayMetrics,
    image: &ImageMetrics,
) -> CropRect {
    let (scale_x, scale_y) = scales(display, image);
    CropRect {
        left: display.offset_x + region.left * scale_x,
        top: display.offset_y + region.top * scale_y,
        width: region.width * scale_x,
        height: region.height * scale_y,
    }
}

/// Map a display-space rect back into image pixel space.
///
/// The crop session hands off display coordinates; consumers that need
/// pixel-accurate crops call this themselves.
pub fn display_to_image(
    rect: &CropRect,
    display: &DisplayMetrics,
    image: &ImageMetrics,
) -> BoundingBox {
    let (scale_x, scale_y) = scales(display, image);
    BoundingBox {
        left: (rect.left - display.offset_x) / scale_x,
        top: (rect.top - display.offset_y) / scale_y,
        width: rect.width / scale_x,
        height: rect.height / scale_y,
    }
}
