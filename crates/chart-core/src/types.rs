// File: crates/chart-core/src/types.rs
// Summary: Default surface size, time-axis padding and plot insets.

use crate::geometry::RectF;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Right padding of the time axis beyond the last sample (45 days).
pub const X_PADDING_SECS: i64 = 45 * 24 * 3600;

/// Margins between the surface edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot rectangle inside a `width x height` surface.
    pub fn plot_rect(&self, width: f32, height: f32) -> RectF {
        RectF::from_ltrb(
            self.left as f32,
            self.top as f32,
            width - self.right as f32,
            height - self.bottom as f32,
        )
    }
}

impl Default for Insets {
    /// Title on top, month labels below, the annotation column on the right.
    fn default() -> Self {
        Self::new(24, 150, 40, 64)
    }
}
