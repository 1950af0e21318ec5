use crate::consts::{DEFAULT_TRANSITION_RATE, TRANSITION_SNAP_DISTANCE};
use crate::geometry::CropRect;

/// Eases a displayed rect toward the crop box after initialization.
///
/// Purely presentational: the crop box already holds the target, only the
/// drawn rect lags behind it for a few frames.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    current: CropRect,
    target: CropRect,
    rate: f32,
}

impl Transition {
    pub fn new(from: CropRect, to: CropRect) -> Self {
        Self::with_rate(from, to, DEFAULT_TRANSITION_RATE)
    }

    /// `rate` is the fraction of the remaining distance covered per step,
    /// clamped to `(0, 1]`.
    pub fn with_rate(from: CropRect, to: CropRect, rate: f32) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 { rate.min(1.0) } else { 1.0 };
        Self {
            current: from,
            target: to,
            rate,
        }
    }

    pub fn current(&self) -> CropRect {
        self.current
    }

    pub fn target(&self) -> CropRect {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame and return the rect to draw.
    pub fn step(&mut self) -> CropRect {
        let approach = |from: f32, to: f32| {
            let next = from + (to - from) * self.rate;
            if (to - next).abs() < TRANSITION_SNAP_DISTANCE { to } else { next }
        };
        self.current = CropRect {
            left: approach(self.current.left, self.target.left),
            top: approach(self.current.top, self.target.top),
            width: approach(self.current.width, self.target.width),
            height: approach(self.current.height, self.target.height),
        };
        self.current
    }
}
