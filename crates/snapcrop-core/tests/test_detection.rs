mod common;

use approx::assert_relative_eq;
use tempfile::TempDir;

use common::{page_with_blocks, save_png};
use snapcrop_core::capture::{rgb_to_luminance, CaptureProvider, CapturedImage, FileCapture};
use snapcrop_core::detection::{
    enclose_blocks, region_or_none, DetectionConfig, InkDetector, NullDetector,
    TextDetector, ThresholdMethod,
};
use snapcrop_core::error::{Result, SnapcropError};
use snapcrop_core::geometry::BoundingBox;

fn exact_config() -> DetectionConfig {
    DetectionConfig {
        threshold_method: ThresholdMethod::Fixed(0.5),
        blur_sigma: 0.0,
        ..DetectionConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Block union
// ---------------------------------------------------------------------------

#[test]
fn test_enclose_blocks_pads_union() {
    let blocks = [
        BoundingBox::new(100.0, 50.0, 80.0, 20.0),
        BoundingBox::new(120.0, 90.0, 200.0, 30.0),
    ];
    let region = enclose_blocks(&blocks, 20.0).unwrap();
    assert_eq!(region, BoundingBox::new(80.0, 30.0, 260.0, 110.0));
}

#[test]
fn test_enclose_blocks_floors_left_top_only() {
    let blocks = [BoundingBox::new(5.0, 10.0, 50.0, 40.0)];
    let region = enclose_blocks(&blocks, 20.0).unwrap();
    assert_eq!(region.left, 0.0);
    assert_eq!(region.top, 0.0);
    // Width keeps both paddings even though the left edge was floored.
    assert_eq!(region.width, 90.0);
    assert_eq!(region.height, 80.0);
}

#[test]
fn test_enclose_blocks_empty_is_none() {
    assert_eq!(enclose_blocks(&[], 20.0), None);
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

#[test]
fn test_null_detector_finds_nothing() {
    assert_eq!(NullDetector.recognize_region("page.png").unwrap(), None);
}

struct FailingDetector;

impl TextDetector for FailingDetector {
    fn recognize_region(&self, _image_uri: &str) -> Result<Option<BoundingBox>> {
        Err(SnapcropError::Detection("model unavailable".into()))
    }
}

#[test]
fn test_detection_failure_treated_as_none() {
    assert_eq!(region_or_none(FailingDetector.recognize_region("page.png")), None);
}

#[test]
fn test_ink_detector_single_block_exact() {
    let img = page_with_blocks(200, 100, &[(50, 40, 70, 20)]);
    let luma = rgb_to_luminance(&img);

    let detector = InkDetector::new(exact_config()).unwrap();
    let blocks = detector.detect_blocks(&luma);
    assert_eq!(blocks, vec![BoundingBox::new(50.0, 40.0, 70.0, 20.0)]);

    let region = detector.detect_region(&luma).unwrap();
    assert_eq!(region, BoundingBox::new(30.0, 20.0, 110.0, 60.0));
}

#[test]
fn test_ink_detector_merges_nearby_glyphs() {
    // Three "letters" 3px apart merge into one block under closing radius 4.
    let img = page_with_blocks(
        200,
        100,
        &[(40, 40, 10, 15), (53, 40, 10, 15), (66, 40, 10, 15)],
    );
    let detector = InkDetector::new(exact_config()).unwrap();
    let blocks = detector.detect_blocks(&rgb_to_luminance(&img));
    assert_eq!(blocks, vec![BoundingBox::new(40.0, 40.0, 36.0, 15.0)]);
}

#[test]
fn test_ink_detector_unions_separate_lines() {
    let img = page_with_blocks(300, 200, &[(40, 30, 120, 12), (60, 120, 200, 14)]);
    let detector = InkDetector::new(exact_config()).unwrap();
    let luma = rgb_to_luminance(&img);

    assert_eq!(detector.detect_blocks(&luma).len(), 2);
    let region = detector.detect_region(&luma).unwrap();
    assert_eq!(region, BoundingBox::new(20.0, 10.0, 260.0, 144.0));
}

#[test]
fn test_ink_detector_ignores_specks_and_border_shadows() {
    // A 1px speck is below min_area; a dark band along the left edge is a
    // shadow, not text.
    let img = page_with_blocks(200, 100, &[(100, 50, 1, 1), (0, 0, 6, 100)]);
    let detector = InkDetector::new(exact_config()).unwrap();
    assert!(detector.detect_blocks(&rgb_to_luminance(&img)).is_empty());
}

#[test]
fn test_ink_detector_blank_page_has_no_text() {
    let img = page_with_blocks(120, 80, &[]);
    let detector = InkDetector::default();
    assert_eq!(detector.detect_region(&rgb_to_luminance(&img)), None);
}

#[test]
fn test_ink_detector_default_config_contains_text() {
    let img = page_with_blocks(320, 240, &[(80, 100, 150, 30)]);
    let detector = InkDetector::default();
    let region = detector.detect_region(&rgb_to_luminance(&img)).unwrap();

    assert!(region.left <= 80.0 && region.top <= 100.0, "{region:?}");
    assert!(region.right() >= 230.0 && region.bottom() >= 130.0, "{region:?}");
    assert!(region.width < 230.0 && region.height < 110.0, "{region:?}");
}

#[test]
fn test_ink_detector_reads_file() {
    let dir = TempDir::new().unwrap();
    let img = page_with_blocks(200, 100, &[(50, 40, 70, 20)]);
    let uri = save_png(&img, dir.path(), "page.png");

    let detector = InkDetector::new(exact_config()).unwrap();
    let region = detector.recognize_region(&uri).unwrap().unwrap();
    assert_relative_eq!(region.left, 30.0);
    assert_relative_eq!(region.width, 110.0);
}

#[test]
fn test_ink_detector_missing_file_is_error() {
    let detector = InkDetector::default();
    let result = detector.recognize_region("/nonexistent/page.png");
    assert!(result.is_err());
    assert_eq!(region_or_none(result), None);
}

// ---------------------------------------------------------------------------
// Capture
// ---------------------------------------------------------------------------

#[test]
fn test_captured_image_reads_dimensions() {
    let dir = TempDir::new().unwrap();
    let uri = save_png(&page_with_blocks(64, 48, &[]), dir.path(), "shot.png");

    let captured = CapturedImage::open(std::path::Path::new(&uri)).unwrap();
    assert_eq!(captured.uri, uri);
    assert_eq!((captured.metrics.width, captured.metrics.height), (64, 48));

    let mut provider = FileCapture::new(Some(uri.into()));
    assert_eq!(provider.capture().unwrap(), captured);
}

#[test]
fn test_file_capture_without_path_is_missing_input() {
    let mut provider = FileCapture::new(None);
    assert!(matches!(provider.capture(), Err(SnapcropError::MissingInput)));
}

#[test]
fn test_luminance_range() {
    let img = page_with_blocks(4, 4, &[(0, 0, 2, 2)]);
    let luma = rgb_to_luminance(&img);
    assert_relative_eq!(luma[[0, 0]], 0.0);
    assert_relative_eq!(luma[[3, 3]], 1.0, epsilon = 1e-5);
}
