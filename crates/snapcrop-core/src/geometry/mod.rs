pub mod letterbox;
pub mod region;
pub mod types;

pub use letterbox::compute_display_metrics;
pub use region::{display_to_image, image_to_display};
pub use types::{BoundingBox, CropRect, DisplayMetrics, ImageMetrics, Viewport};
