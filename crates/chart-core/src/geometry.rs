// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Linear map from a value range onto a pixel range. `px_start` may be
/// greater than `px_end` (value axes grow upward on a y-down canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, px_start: f32, px_end: f32) -> Self {
        Self { min, max, px_start, px_end }
    }

    /// Position of `v` in `[0, 1]` across the range (unclamped).
    #[inline]
    pub fn norm(&self, v: f64) -> f64 {
        let span = (self.max - self.min).max(1e-12);
        (v - self.min) / span
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px_start + self.norm(v) as f32 * (self.px_end - self.px_start)
    }
}
