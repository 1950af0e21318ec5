mod common;

use approx::assert_relative_eq;

use common::{assert_fits, crop_config, tall_viewport};
use snapcrop_core::config::CropConfig;
use snapcrop_core::crop::{default_rect, initialize, CropBox, CropSeed};
use snapcrop_core::geometry::{
    compute_display_metrics, BoundingBox, CropRect, ImageMetrics, Viewport,
};

// ---------------------------------------------------------------------------
// Default rect
// ---------------------------------------------------------------------------

#[test]
fn test_default_rect_centered_in_displayed_image() {
    let viewport = tall_viewport();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let rect = default_rect(&d, &crop_config());
    assert_relative_eq!(rect.width, 800.0, epsilon = 1e-3);
    assert_relative_eq!(rect.height, 150.0, epsilon = 1e-3);
    assert_relative_eq!(rect.left, 100.0, epsilon = 1e-3);
    assert_relative_eq!(rect.top, 750.0 + 175.0, epsilon = 1e-3);
}

#[test]
fn test_default_rect_uses_horizontal_offset() {
    let viewport = Viewport::new(1000.0, 500.0).unwrap();
    let image = ImageMetrics::new(600, 1200).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let rect = default_rect(&d, &crop_config());
    // Display area is 250x500 at x=375.
    assert_relative_eq!(rect.width, 200.0, epsilon = 1e-3);
    assert_relative_eq!(rect.left, 375.0 + 25.0, epsilon = 1e-3);
    assert_relative_eq!(rect.top, 175.0, epsilon = 1e-3);
    assert_relative_eq!(rect.height, 150.0, epsilon = 1e-3);
}

#[test]
fn test_initialize_without_detection_uses_default() {
    let viewport = tall_viewport();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let (crop, seed) = initialize(&d, &image, viewport, None, &crop_config());
    assert_eq!(seed, CropSeed::Default);
    assert_eq!(crop.rect(), default_rect(&d, &crop_config()));
    assert_eq!(crop.revision(), 0);
}

// ---------------------------------------------------------------------------
// Detected rect
// ---------------------------------------------------------------------------

#[test]
fn test_initialize_detected_box_expands_height_symmetrically() {
    let viewport = tall_viewport();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);
    let detected = BoundingBox::new(100.0, 50.0, 200.0, 80.0);

    let (crop, seed) = initialize(&d, &image, viewport, Some(&detected), &crop_config());
    assert_eq!(seed, CropSeed::Detected);
    // Mapped to {50, 775, 100, 40}; height grows to 80 about its center.
    assert_eq!(crop.rect(), CropRect::new(50.0, 755.0, 100.0, 80.0));
    assert_fits(&crop.rect(), &viewport, 80.0);
}

#[test]
fn test_initialize_tiny_box_at_corner_is_reclamped() {
    let viewport = tall_viewport();
    let image = ImageMetrics::new(1000, 2000).unwrap();
    let d = compute_display_metrics(&image, &viewport);
    let detected = BoundingBox::new(0.0, 0.0, 10.0, 10.0);

    let (crop, _) = initialize(&d, &image, viewport, Some(&detected), &crop_config());
    assert_eq!(crop.rect(), CropRect::new(0.0, 0.0, 80.0, 80.0));
}

#[test]
fn test_initialize_oversized_box_is_clamped_to_viewport() {
    let viewport = tall_viewport();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);
    // Padding can push the union past the image edge.
    let detected = BoundingBox::new(1900.0, 900.0, 400.0, 300.0);

    let (crop, _) = initialize(&d, &image, viewport, Some(&detected), &crop_config());
    let rect = crop.rect();
    assert_fits(&rect, &viewport, 80.0);
    assert_eq!(rect.width, 200.0);
    assert_eq!(rect.height, 150.0);
    assert_eq!(rect.left, 800.0);
}

#[test]
fn test_initialized_rects_always_fit() {
    let config = crop_config();
    let viewports = [(390.0, 844.0), (1000.0, 2000.0), (1280.0, 720.0)];
    let images = [(4032, 3024), (3024, 4032), (100, 100), (5000, 200)];
    let boxes = [
        None,
        Some(BoundingBox::new(0.0, 0.0, 1.0, 1.0)),
        Some(BoundingBox::new(50.0, 60.0, 70.0, 20.0)),
        Some(BoundingBox::new(-40.0, -40.0, 9000.0, 9000.0)),
        Some(BoundingBox::new(3000.0, 150.0, 2000.0, 10.0)),
    ];

    for &(vw, vh) in &viewports {
        let viewport = Viewport::new(vw, vh).unwrap();
        for &(iw, ih) in &images {
            let image = ImageMetrics::new(iw, ih).unwrap();
            let d = compute_display_metrics(&image, &viewport);
            for detected in &boxes {
                let (crop, _) = initialize(&d, &image, viewport, detected.as_ref(), &config);
                assert_fits(&crop.rect(), &viewport, config.min_box_size);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CropBox
// ---------------------------------------------------------------------------

#[test]
fn test_crop_box_min_size_capped_by_small_viewport() {
    let viewport = Viewport::new(60.0, 400.0).unwrap();
    let crop = CropBox::new(CropRect::new(10.0, 10.0, 20.0, 20.0), viewport, 80.0);

    assert_eq!(crop.min_width(), 60.0);
    assert_eq!(crop.min_height(), 80.0);
    assert_eq!(crop.rect(), CropRect::new(0.0, 0.0, 60.0, 80.0));
}

#[test]
fn test_crop_box_sanitizes_non_finite_values() {
    let viewport = tall_viewport();
    let crop = CropBox::new(
        CropRect::new(f32::NAN, 100.0, f32::INFINITY, 100.0),
        viewport,
        80.0,
    );
    let rect = crop.rect();
    assert!(rect.left.is_finite() && rect.width.is_finite());
    assert_fits(&rect, &viewport, 80.0);
}

#[test]
fn test_custom_min_box_size() {
    let config = CropConfig {
        min_box_size: 120.0,
        ..CropConfig::default()
    };
    let viewport = tall_viewport();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);
    let detected = BoundingBox::new(100.0, 50.0, 200.0, 80.0);

    let (crop, _) = initialize(&d, &image, viewport, Some(&detected), &config);
    assert_eq!(crop.rect().width, 120.0);
    assert_eq!(crop.rect().height, 120.0);
    assert_eq!(crop.min_size(), 120.0);
}
