use snapcrop_core::geometry::Viewport;

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Original image size in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Size of the central panel on the last frame.
    pub panel_size: egui::Vec2,
}

impl ViewportState {
    /// The central panel as a crop viewport, or `fallback` before the
    /// first frame has been laid out.
    pub fn panel_viewport(&self, fallback: Viewport) -> Viewport {
        Viewport::new(self.panel_size.x, self.panel_size.y).unwrap_or(fallback)
    }
}
