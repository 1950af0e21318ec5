use crate::geometry::{CropRect, Viewport};

/// Read-only snapshot of the crop box handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropView {
    pub rect: CropRect,
    /// Incremented on every accepted mutation.
    pub revision: u64,
}

/// The current crop selection in display space.
///
/// Only the initializer and the drag controllers write to it (through
/// `&mut CropBox`); everything else reads a [`CropView`]. Every write keeps
/// the rect inside the viewport and at least `min_size` on each side.
#[derive(Clone, Debug)]
pub struct CropBox {
    rect: CropRect,
    viewport: Viewport,
    min_size: f32,
    revision: u64,
}

impl CropBox {
    /// Create a crop box from an arbitrary rect, normalizing it to the
    /// viewport and minimum size.
    pub fn new(rect: CropRect, viewport: Viewport, min_size: f32) -> Self {
        let mut crop = Self {
            rect,
            viewport,
            min_size: min_size.max(0.0),
            revision: 0,
        };
        crop.rect = crop.normalize(rect);
        crop
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    /// Effective minimum width; never larger than the viewport.
    pub fn min_width(&self) -> f32 {
        self.min_size.min(self.viewport.width)
    }

    /// Effective minimum height; never larger than the viewport.
    pub fn min_height(&self) -> f32 {
        self.min_size.min(self.viewport.height)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> CropView {
        CropView {
            rect: self.rect,
            revision: self.revision,
        }
    }

    /// Replace the rect. The value is normalized before it is stored.
    pub(crate) fn set(&mut self, rect: CropRect) {
        let rect = self.normalize(rect);
        if rect != self.rect {
            self.rect = rect;
            self.revision += 1;
        }
    }

    /// Expand undersized sides symmetrically to the minimum, shrink
    /// oversized sides to the viewport, then clamp the position.
    fn normalize(&self, rect: CropRect) -> CropRect {
        let (left, width) = fit_axis(
            finite_or_zero(rect.left),
            finite_or_zero(rect.width),
            self.min_width(),
            self.viewport.width,
        );
        let (top, height) = fit_axis(
            finite_or_zero(rect.top),
            finite_or_zero(rect.height),
            self.min_height(),
            self.viewport.height,
        );
        CropRect { left, top, width, height }
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Fit one axis `(pos, len)` into `[0, limit]` with `len >= min`.
fn fit_axis(pos: f32, len: f32, min: f32, limit: f32) -> (f32, f32) {
    let mut pos = pos;
    let mut len = len;

    if len < min {
        pos -= (min - len) / 2.0;
        len = min;
    }
    if len > limit {
        pos += (len - limit) / 2.0;
        len = limit;
    }

    let mut pos = pos.min(limit - len).max(0.0);
    // `pos + len` can still round one ulp past `limit`; pull `pos` back.
    for _ in 0..4 {
        let overshoot = (pos + len) - limit;
        if overshoot <= 0.0 {
            return (pos, len);
        }
        pos = (pos - overshoot).max(0.0);
    }
    if pos + len > limit {
        pos = 0.0;
    }
    (pos, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_axis_expands_about_center() {
        let (pos, len) = fit_axis(775.0, 40.0, 80.0, 2000.0);
        assert_eq!((pos, len), (755.0, 80.0));
    }

    #[test]
    fn fit_axis_clamps_after_expanding() {
        let (pos, len) = fit_axis(5.0, 20.0, 80.0, 1000.0);
        assert_eq!((pos, len), (0.0, 80.0));

        let (pos, len) = fit_axis(990.0, 20.0, 80.0, 1000.0);
        assert_eq!((pos, len), (920.0, 80.0));
    }

    #[test]
    fn fit_axis_far_edge_never_rounds_past_limit() {
        let limit = 106.130005_f32;
        let (pos, len) = fit_axis(26.130005, 80.0, 80.0, limit);
        assert_eq!(len, 80.0);
        assert!(pos + len <= limit, "{} > {limit}", pos + len);

        let (pos, len) = fit_axis(500.0, 80.3, 80.0, 117.7);
        assert!(pos >= 0.0 && pos + len <= 117.7);
    }

    #[test]
    fn fit_axis_shrinks_to_limit() {
        let (pos, len) = fit_axis(-50.0, 1200.0, 80.0, 1000.0);
        assert_eq!((pos, len), (0.0, 1000.0));
    }
}
