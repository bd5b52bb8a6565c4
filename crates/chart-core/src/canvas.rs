// File: crates/chart-core/src/canvas.rs
// Summary: Drawing seam used by the composer: line/text primitives plus text metrics.

use skia_safe as skia;

use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    /// On/off dash lengths; `None` draws solid.
    pub dash: Option<[f32; 2]>,
}

impl LineStyle {
    pub fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: skia::Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
}

impl TextStyle {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color }
    }

    pub fn with_color(self, color: skia::Color) -> Self {
        Self { color, ..self }
    }
}

/// Measured extent of a text run. `height` spans ascent plus descent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtents {
    pub width: f32,
    pub height: f32,
    pub descent: f32,
}

impl TextExtents {
    /// Extent above the baseline.
    pub fn ascent(&self) -> f32 {
        self.height - self.descent
    }
}

/// Rendering capability consumed by the chart composer. Text is anchored at
/// its left baseline.
pub trait Canvas {
    /// Drawable width and height in pixels.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self, color: skia::Color);

    fn fill_rect(&mut self, color: skia::Color, rect: RectF);

    fn stroke_line(&mut self, style: &LineStyle, from: Point, to: Point);

    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]) {
        for pair in points.windows(2) {
            self.stroke_line(style, pair[0], pair[1]);
        }
    }

    fn fill_text(&mut self, style: &TextStyle, at: Point, text: &str);

    fn measure_text(&self, style: &TextStyle, text: &str) -> TextExtents;
}
