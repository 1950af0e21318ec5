use crate::consts::HANDLE_SIZE;
use crate::geometry::{CropRect, Viewport};

use super::drag::Handle;

/// The four dimmed regions around the crop box, covering the rest of the
/// viewport without overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskRegions {
    /// Full width, above the box.
    pub top: CropRect,
    /// Full width, below the box.
    pub bottom: CropRect,
    /// Between top and bottom, left of the box.
    pub left: CropRect,
    /// Between top and bottom, right of the box.
    pub right: CropRect,
}

impl MaskRegions {
    pub fn iter(&self) -> impl Iterator<Item = &CropRect> {
        [&self.top, &self.bottom, &self.left, &self.right].into_iter()
    }
}

pub fn mask_regions(rect: &CropRect, viewport: &Viewport) -> MaskRegions {
    MaskRegions {
        top: CropRect::new(0.0, 0.0, viewport.width, rect.top),
        bottom: CropRect::new(
            0.0,
            rect.bottom(),
            viewport.width,
            (viewport.height - rect.bottom()).max(0.0),
        ),
        left: CropRect::new(0.0, rect.top, rect.left, rect.height),
        right: CropRect::new(
            rect.right(),
            rect.top,
            (viewport.width - rect.right()).max(0.0),
            rect.height,
        ),
    }
}

/// Touch target of `handle`: a square centered on the corner for resize
/// handles, the box itself for `Move`.
pub fn handle_rect(rect: &CropRect, handle: Handle) -> CropRect {
    let (cx, cy) = match handle {
        Handle::Move => return *rect,
        Handle::ResizeTopLeft => (rect.left, rect.top),
        Handle::ResizeTopRight => (rect.right(), rect.top),
        Handle::ResizeBottomLeft => (rect.left, rect.bottom()),
        Handle::ResizeBottomRight => (rect.right(), rect.bottom()),
    };
    let half = HANDLE_SIZE / 2.0;
    CropRect::new(cx - half, cy - half, HANDLE_SIZE, HANDLE_SIZE)
}

/// Which handle a pointer press at `(x, y)` grabs. Corners win over the body.
pub fn hit_test(rect: &CropRect, x: f32, y: f32) -> Option<Handle> {
    Handle::CORNERS
        .into_iter()
        .find(|&h| handle_rect(rect, h).contains(x, y))
        .or_else(|| rect.contains(x, y).then_some(Handle::Move))
}
