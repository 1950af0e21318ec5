use std::path::Path;

use image::{Rgb, RgbImage};
use snapcrop_core::config::CropConfig;
use snapcrop_core::geometry::{CropRect, Viewport};

/// Viewport used by the worked examples: a tall 1000x2000 screen.
pub fn tall_viewport() -> Viewport {
    Viewport::new(1000.0, 2000.0).unwrap()
}

pub fn crop_config() -> CropConfig {
    CropConfig::default()
}

/// Assert the crop box invariants exactly. The minimum is capped per axis
/// by the viewport, as the crop box does.
pub fn assert_fits(rect: &CropRect, viewport: &Viewport, min_size: f32) {
    let min_width = min_size.min(viewport.width);
    let min_height = min_size.min(viewport.height);
    assert!(rect.width >= min_width, "width {} < {min_width}", rect.width);
    assert!(rect.height >= min_height, "height {} < {min_height}", rect.height);
    assert!(rect.left >= 0.0, "left {} < 0", rect.left);
    assert!(rect.top >= 0.0, "top {} < 0", rect.top);
    assert!(
        rect.right() <= viewport.width,
        "right {} > {}",
        rect.right(),
        viewport.width
    );
    assert!(
        rect.bottom() <= viewport.height,
        "bottom {} > {}",
        rect.bottom(),
        viewport.height
    );
}

/// White page with black filled rectangles `(left, top, width, height)`.
pub fn page_with_blocks(width: u32, height: u32, blocks: &[(u32, u32, u32, u32)]) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for &(left, top, w, h) in blocks {
        for y in top..top + h {
            for x in left..left + w {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }
    img
}

pub fn save_png(img: &RgbImage, dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path.to_string_lossy().into_owned()
}
