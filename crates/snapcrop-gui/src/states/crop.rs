use snapcrop_core::crop::{Handle, Transition};
use snapcrop_core::geometry::CropRect;

/// Pointer gesture in progress on one handle.
#[derive(Clone, Copy, Debug)]
pub struct ActiveDrag {
    pub handle: Handle,
    /// Screen position where the pointer went down.
    pub origin: egui::Pos2,
}

/// UI-side crop state. The crop rect itself lives in the session; this
/// only tracks the pointer and the intro animation.
#[derive(Default)]
pub struct CropUiState {
    pub drag: Option<ActiveDrag>,
    pub transition: Option<Transition>,
}

impl CropUiState {
    pub fn reset(&mut self) {
        self.drag = None;
        self.transition = None;
    }

    /// Ease from `from` to the freshly initialized crop box.
    pub fn start_transition(&mut self, from: CropRect, to: CropRect) {
        self.transition = Some(Transition::new(from, to));
    }

    /// The rect to draw this frame. Returns `true` in the second slot while
    /// the animation still needs repaints.
    pub fn displayed(&mut self, crop: CropRect) -> (CropRect, bool) {
        match self.transition.as_mut() {
            Some(t) if t.target() == crop && !t.is_settled() => (t.step(), true),
            _ => {
                self.transition = None;
                (crop, false)
            }
        }
    }
}
