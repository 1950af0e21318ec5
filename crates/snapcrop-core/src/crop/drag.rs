use std::fmt;

use tracing::debug;

use crate::geometry::{CropRect, Viewport};

use super::state::CropBox;

/// Interactive part of the crop box a gesture is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The box body: translates without resizing.
    Move,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

impl Handle {
    pub const ALL: [Self; 5] = [
        Self::Move,
        Self::ResizeTopLeft,
        Self::ResizeTopRight,
        Self::ResizeBottomLeft,
        Self::ResizeBottomRight,
    ];

    pub const CORNERS: [Self; 4] = [
        Self::ResizeTopLeft,
        Self::ResizeTopRight,
        Self::ResizeBottomLeft,
        Self::ResizeBottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Move => 0,
            Self::ResizeTopLeft => 1,
            Self::ResizeTopRight => 2,
            Self::ResizeBottomLeft => 3,
            Self::ResizeBottomRight => 4,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => f.pad("move"),
            Self::ResizeTopLeft => f.pad("top-left"),
            Self::ResizeTopRight => f.pad("top-right"),
            Self::ResizeBottomLeft => f.pad("bottom-left"),
            Self::ResizeBottomRight => f.pad("bottom-right"),
        }
    }
}

/// Crop rect captured when a gesture starts. All updates of that gesture
/// are computed from this snapshot plus the cumulative translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start: CropRect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging(DragSession),
}

/// Gesture state machine for a single handle: `Idle -> Dragging -> Idle`.
#[derive(Clone, Debug)]
pub struct DragController {
    handle: Handle,
    state: DragState,
}

impl DragController {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            state: DragState::Idle,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Snapshot the crop box and enter `Dragging`. Restarting while already
    /// dragging takes a fresh snapshot.
    pub fn on_start(&mut self, crop: &CropBox) {
        let session = DragSession { start: crop.rect() };
        debug!(handle = %self.handle, start = ?session.start, "Drag started");
        self.state = DragState::Dragging(session);
    }

    /// Apply the cumulative translation `(tx, ty)` since gesture start.
    ///
    /// Returns whether the crop box changed. Ignored while idle.
    pub fn on_update(&mut self, crop: &mut CropBox, tx: f32, ty: f32) -> bool {
        let DragState::Dragging(session) = self.state else {
            return false;
        };
        if !(tx.is_finite() && ty.is_finite()) {
            return false;
        }

        let before = crop.revision();
        let next = apply_drag(
            self.handle,
            &session,
            crop.rect(),
            tx,
            ty,
            crop.viewport(),
            crop.min_width(),
            crop.min_height(),
        );
        crop.set(next);
        crop.revision() != before
    }

    /// Finish the gesture; the last accepted rect stays.
    pub fn on_end(&mut self) {
        if self.is_dragging() {
            debug!(handle = %self.handle, "Drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Cancel behaves like end: no rollback.
    pub fn on_cancel(&mut self) {
        self.on_end();
    }
}

/// Compute the crop rect for one drag tick.
///
/// `current` supplies the value kept for any axis whose candidate is
/// rejected; accepted axes are derived from `session` alone.
#[allow(clippy::too_many_arguments)]
pub fn apply_drag(
    handle: Handle,
    session: &DragSession,
    current: CropRect,
    tx: f32,
    ty: f32,
    viewport: Viewport,
    min_width: f32,
    min_height: f32,
) -> CropRect {
    let s = session.start;
    let mut next = current;

    match handle {
        Handle::Move => {
            next.left = (s.left + tx).min(viewport.width - s.width).max(0.0);
            next.top = (s.top + ty).min(viewport.height - s.height).max(0.0);
            next.width = s.width;
            next.height = s.height;
        }
        Handle::ResizeTopLeft => {
            if let Some((left, width)) = drag_leading_edge(s.left, s.width, tx, min_width) {
                next.left = left;
                next.width = width;
            }
            if let Some((top, height)) = drag_leading_edge(s.top, s.height, ty, min_height) {
                next.top = top;
                next.height = height;
            }
        }
        Handle::ResizeTopRight => {
            if let Some(width) =
                drag_trailing_edge(s.left, s.width, tx, min_width, viewport.width)
            {
                next.width = width;
            }
            if let Some((top, height)) = drag_leading_edge(s.top, s.height, ty, min_height) {
                next.top = top;
                next.height = height;
            }
        }
        Handle::ResizeBottomLeft => {
            if let Some((left, width)) = drag_leading_edge(s.left, s.width, tx, min_width) {
                next.left = left;
                next.width = width;
            }
            if let Some(height) =
                drag_trailing_edge(s.top, s.height, ty, min_height, viewport.height)
            {
                next.height = height;
            }
        }
        Handle::ResizeBottomRight => {
            if let Some(width) =
                drag_trailing_edge(s.left, s.width, tx, min_width, viewport.width)
            {
                next.width = width;
            }
            if let Some(height) =
                drag_trailing_edge(s.top, s.height, ty, min_height, viewport.height)
            {
                next.height = height;
            }
        }
    }

    next
}

/// Move the leading (left/top) edge by `delta`, keeping the trailing edge
/// fixed. Rejected when the side would drop below `min` or the edge would
/// leave the viewport.
fn drag_leading_edge(start_pos: f32, start_len: f32, delta: f32, min: f32) -> Option<(f32, f32)> {
    let len = start_len - delta;
    let pos = start_pos + delta;
    (len >= min && pos >= 0.0).then_some((pos, len))
}

/// Move the trailing (right/bottom) edge by `delta`, keeping the leading
/// edge fixed. Rejected when the side would drop below `min` or extend past
/// `limit`.
fn drag_trailing_edge(start_pos: f32, start_len: f32, delta: f32, min: f32, limit: f32) -> Option<f32> {
    let len = start_len + delta;
    (len >= min && start_pos + len <= limit).then_some(len)
}
