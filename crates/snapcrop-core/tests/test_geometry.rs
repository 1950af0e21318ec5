use approx::assert_relative_eq;

use snapcrop_core::geometry::{
    compute_display_metrics, display_to_image, image_to_display, BoundingBox, CropRect,
    ImageMetrics, Viewport,
};

// ---------------------------------------------------------------------------
// Letterbox
// ---------------------------------------------------------------------------

#[test]
fn test_letterbox_wide_image_in_tall_viewport() {
    let viewport = Viewport::new(1000.0, 2000.0).unwrap();
    let image = ImageMetrics::new(2000, 1000).unwrap();

    let d = compute_display_metrics(&image, &viewport);
    assert_eq!(d.display_width, 1000.0);
    assert_eq!(d.display_height, 500.0);
    assert_eq!(d.offset_x, 0.0);
    assert_eq!(d.offset_y, 750.0);
}

#[test]
fn test_letterbox_tall_image_pillarboxed() {
    let viewport = Viewport::new(1000.0, 500.0).unwrap();
    let image = ImageMetrics::new(600, 1200).unwrap();

    let d = compute_display_metrics(&image, &viewport);
    assert_eq!(d.display_height, 500.0);
    assert_eq!(d.display_width, 250.0);
    assert_eq!(d.offset_x, 375.0);
    assert_eq!(d.offset_y, 0.0);
}

#[test]
fn test_letterbox_matching_aspect_has_no_offsets() {
    let viewport = Viewport::new(390.0, 844.0).unwrap();
    let image = ImageMetrics::new(780, 1688).unwrap();

    let d = compute_display_metrics(&image, &viewport);
    assert_relative_eq!(d.display_width, 390.0, epsilon = 1e-3);
    assert_relative_eq!(d.display_height, 844.0, epsilon = 1e-3);
    assert_relative_eq!(d.offset_x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(d.offset_y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_letterbox_preserves_aspect_and_fits() {
    let viewports = [(390.0, 844.0), (1000.0, 2000.0), (1920.0, 1080.0), (500.0, 500.0)];
    let images = [(4032, 3024), (3024, 4032), (1, 1000), (1000, 1), (640, 480), (7, 3)];

    for &(vw, vh) in &viewports {
        let viewport = Viewport::new(vw, vh).unwrap();
        for &(iw, ih) in &images {
            let image = ImageMetrics::new(iw, ih).unwrap();
            let d = compute_display_metrics(&image, &viewport);

            assert!(d.display_width <= vw + 1e-3, "{iw}x{ih} in {vw}x{vh}: {d:?}");
            assert!(d.display_height <= vh + 1e-3, "{iw}x{ih} in {vw}x{vh}: {d:?}");
            assert_relative_eq!(
                d.display_width / d.display_height,
                image.aspect(),
                max_relative = 1e-3
            );
            // One axis is filled, the other centered.
            assert!(d.offset_x == 0.0 || d.offset_y == 0.0, "{d:?}");
            assert!(d.offset_x >= 0.0 && d.offset_y >= 0.0, "{d:?}");
            assert_relative_eq!(d.offset_x * 2.0 + d.display_width, vw, epsilon = 1e-2);
            assert_relative_eq!(d.offset_y * 2.0 + d.display_height, vh, epsilon = 1e-2);
        }
    }
}

#[test]
fn test_zero_image_metrics_rejected() {
    assert!(ImageMetrics::new(0, 100).is_err());
    assert!(ImageMetrics::new(100, 0).is_err());
}

#[test]
fn test_invalid_viewport_rejected() {
    assert!(Viewport::new(0.0, 100.0).is_err());
    assert!(Viewport::new(100.0, -1.0).is_err());
    assert!(Viewport::new(f32::NAN, 100.0).is_err());
    assert!(Viewport::new(f32::INFINITY, 100.0).is_err());
}

// ---------------------------------------------------------------------------
// Region mapping
// ---------------------------------------------------------------------------

#[test]
fn test_region_full_image_maps_to_display_area() {
    let viewport = Viewport::new(1000.0, 2000.0).unwrap();
    for (iw, ih) in [(2000, 1000), (1000, 3000), (333, 777)] {
        let image = ImageMetrics::new(iw, ih).unwrap();
        let d = compute_display_metrics(&image, &viewport);

        let mapped = image_to_display(&image.full_box(), &d, &image);
        assert_relative_eq!(mapped.left, d.offset_x, epsilon = 1e-3);
        assert_relative_eq!(mapped.top, d.offset_y, epsilon = 1e-3);
        assert_relative_eq!(mapped.width, d.display_width, epsilon = 1e-3);
        assert_relative_eq!(mapped.height, d.display_height, epsilon = 1e-3);
    }
}

#[test]
fn test_region_detection_box_example() {
    let viewport = Viewport::new(1000.0, 2000.0).unwrap();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let mapped = image_to_display(&BoundingBox::new(100.0, 50.0, 200.0, 80.0), &d, &image);
    assert_eq!(mapped, CropRect::new(50.0, 775.0, 100.0, 40.0));
}

#[test]
fn test_region_mapping_does_not_clamp() {
    let viewport = Viewport::new(1000.0, 2000.0).unwrap();
    let image = ImageMetrics::new(2000, 1000).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let mapped = image_to_display(&BoundingBox::new(-200.0, 0.0, 4400.0, 10.0), &d, &image);
    assert_eq!(mapped.left, -100.0);
    assert_eq!(mapped.width, 2200.0);
}

#[test]
fn test_display_to_image_inverts_mapping() {
    let viewport = Viewport::new(390.0, 844.0).unwrap();
    let image = ImageMetrics::new(4032, 3024).unwrap();
    let d = compute_display_metrics(&image, &viewport);

    let region = BoundingBox::new(812.0, 1400.0, 1900.0, 420.0);
    let back = display_to_image(&image_to_display(&region, &d, &image), &d, &image);
    assert_relative_eq!(back.left, region.left, max_relative = 1e-4);
    assert_relative_eq!(back.top, region.top, max_relative = 1e-4);
    assert_relative_eq!(back.width, region.width, max_relative = 1e-4);
    assert_relative_eq!(back.height, region.height, max_relative = 1e-4);
}
