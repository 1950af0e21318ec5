use std::path::{Path, PathBuf};

use image::RgbImage;
use ndarray::{Array2, Zip};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, SnapcropError};
use crate::geometry::ImageMetrics;

/// A captured photo: where it lives and its intrinsic size.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedImage {
    pub uri: String,
    pub metrics: ImageMetrics,
}

impl CapturedImage {
    pub fn new(uri: impl Into<String>, metrics: ImageMetrics) -> Self {
        Self {
            uri: uri.into(),
            metrics,
        }
    }

    /// Read the image dimensions from disk without decoding pixel data.
    pub fn open(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self::new(
            path.to_string_lossy(),
            ImageMetrics::new(width, height)?,
        ))
    }
}

/// Source of captured images.
pub trait CaptureProvider {
    /// Yields the captured image, or `MissingInput` when there is none.
    fn capture(&mut self) -> Result<CapturedImage>;
}

/// Capture provider backed by an image file on disk.
#[derive(Clone, Debug, Default)]
pub struct FileCapture {
    path: Option<PathBuf>,
}

impl FileCapture {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CaptureProvider for FileCapture {
    fn capture(&mut self) -> Result<CapturedImage> {
        let path = self.path.as_deref().ok_or(SnapcropError::MissingInput)?;
        CapturedImage::open(path)
    }
}

/// Decode an image and convert it to BT.601 luminance in [0.0, 1.0].
pub fn load_luminance(path: &Path) -> Result<Array2<f32>> {
    let rgb = image::open(path)?.to_rgb8();
    Ok(rgb_to_luminance(&rgb))
}

pub fn rgb_to_luminance(rgb: &RgbImage) -> Array2<f32> {
    let (w, h) = rgb.dimensions();
    let mut luma = Array2::<f32>::zeros((h as usize, w as usize));

    let convert = |(row, col): (usize, usize), out: &mut f32| {
        let [r, g, b] = rgb.get_pixel(col as u32, row as u32).0;
        *out = (LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32) / 255.0;
    };

    let zip = Zip::indexed(&mut luma);
    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(convert);
    } else {
        zip.for_each(convert);
    }
    luma
}
