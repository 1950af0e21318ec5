use snapcrop_core::consts::HANDLE_SIZE;
use snapcrop_core::crop::{handle_rect, hit_test, mask_regions, Handle, Transition};
use snapcrop_core::geometry::{CropRect, Viewport};

#[test]
fn test_mask_regions_tile_the_viewport() {
    let viewport = Viewport::new(400.0, 800.0).unwrap();
    let rect = CropRect::new(50.0, 200.0, 300.0, 100.0);
    let mask = mask_regions(&rect, &viewport);

    assert_eq!(mask.top, CropRect::new(0.0, 0.0, 400.0, 200.0));
    assert_eq!(mask.bottom, CropRect::new(0.0, 300.0, 400.0, 500.0));
    assert_eq!(mask.left, CropRect::new(0.0, 200.0, 50.0, 100.0));
    assert_eq!(mask.right, CropRect::new(350.0, 200.0, 50.0, 100.0));

    let masked: f32 = mask.iter().map(|r| r.width * r.height).sum();
    assert_eq!(masked + rect.width * rect.height, viewport.width * viewport.height);
}

#[test]
fn test_mask_regions_empty_when_box_fills_viewport() {
    let viewport = Viewport::new(400.0, 800.0).unwrap();
    let rect = CropRect::new(0.0, 0.0, 400.0, 800.0);
    let mask = mask_regions(&rect, &viewport);
    assert!(mask.iter().all(|r| r.width * r.height == 0.0));
}

#[test]
fn test_handle_rects_centered_on_corners() {
    let rect = CropRect::new(100.0, 100.0, 200.0, 150.0);
    let half = HANDLE_SIZE / 2.0;

    let tl = handle_rect(&rect, Handle::ResizeTopLeft);
    assert_eq!((tl.left, tl.top), (100.0 - half, 100.0 - half));
    let br = handle_rect(&rect, Handle::ResizeBottomRight);
    assert_eq!(br.center(), (300.0, 250.0));
    assert_eq!(handle_rect(&rect, Handle::Move), rect);
}

#[test]
fn test_hit_test_prefers_corners() {
    let rect = CropRect::new(100.0, 100.0, 200.0, 150.0);

    assert_eq!(hit_test(&rect, 101.0, 101.0), Some(Handle::ResizeTopLeft));
    assert_eq!(hit_test(&rect, 95.0, 95.0), Some(Handle::ResizeTopLeft));
    assert_eq!(hit_test(&rect, 299.0, 102.0), Some(Handle::ResizeTopRight));
    assert_eq!(hit_test(&rect, 102.0, 249.0), Some(Handle::ResizeBottomLeft));
    assert_eq!(hit_test(&rect, 305.0, 255.0), Some(Handle::ResizeBottomRight));
    assert_eq!(hit_test(&rect, 200.0, 175.0), Some(Handle::Move));
    assert_eq!(hit_test(&rect, 20.0, 20.0), None);
}

#[test]
fn test_transition_converges_to_target() {
    let from = CropRect::new(39.0, 253.2, 312.0, 200.0);
    let to = CropRect::new(50.0, 755.0, 100.0, 80.0);
    let mut t = Transition::new(from, to);

    let mut steps = 0;
    while !t.is_settled() {
        t.step();
        steps += 1;
        assert!(steps < 200, "transition did not settle");
    }
    assert_eq!(t.current(), to);
    assert_eq!(t.target(), to);
}

#[test]
fn test_transition_rate_one_jumps() {
    let from = CropRect::new(0.0, 0.0, 100.0, 100.0);
    let to = CropRect::new(10.0, 20.0, 120.0, 90.0);
    let mut t = Transition::with_rate(from, to, 1.0);
    assert_eq!(t.step(), to);
    assert!(t.is_settled());
}
