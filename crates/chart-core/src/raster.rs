// File: crates/chart-core/src/raster.rs
// Summary: Canvas implementation backed by a Skia CPU raster surface.

use skia_safe as skia;

use crate::canvas::{Canvas, LineStyle, TextExtents, TextStyle};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, RectF};
use crate::text::TextShaper;

pub struct RasterCanvas {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl RasterCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Render(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    /// Snapshot the surface and encode it as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }

    fn stroke_paint(style: &LineStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(style.color);
        if let Some([on, off]) = style.dash {
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        paint
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn fill_rect(&mut self, color: skia::Color, rect: RectF) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_line(&mut self, style: &LineStyle, from: Point, to: Point) {
        let paint = Self::stroke_paint(style);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        let paint = Self::stroke_paint(style);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_text(&mut self, style: &TextStyle, at: Point, text: &str) {
        let font = self.shaper.font(style.size);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(style.color);
        self.surface.canvas().draw_str(text, (at.x, at.y), &font, &paint);
    }

    fn measure_text(&self, style: &TextStyle, text: &str) -> TextExtents {
        self.shaper.measure(text, style.size)
    }
}
