use crate::geometry::BoundingBox;

/// Union of all text block frames, grown by `padding` on every side.
///
/// The left/top edges are floored at zero; width and height always include
/// both paddings and are not clipped against the image. `None` for no blocks.
pub fn enclose_blocks(blocks: &[BoundingBox], padding: f32) -> Option<BoundingBox> {
    let (min_x, min_y, max_x, max_y) = blocks.iter().fold(
        (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), b| {
            (
                min_x.min(b.left),
                min_y.min(b.top),
                max_x.max(b.right()),
                max_y.max(b.bottom()),
            )
        },
    );

    if !min_x.is_finite() || !min_y.is_finite() {
        return None;
    }

    Some(BoundingBox {
        left: (min_x - padding).max(0.0),
        top: (min_y - padding).max(0.0),
        width: max_x - min_x + padding * 2.0,
        height: max_y - min_y + padding * 2.0,
    })
}
