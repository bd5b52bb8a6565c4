// File: crates/chart-core/src/text.rs
// Summary: Typeface lookup and text measurement on top of Skia fonts.

use skia_safe as skia;

use crate::canvas::TextExtents;

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        let style = skia::FontStyle::normal();
        let typeface = FAMILIES
            .iter()
            .find_map(|family| mgr.match_family_style(family, style))
            .or_else(|| mgr.legacy_make_typeface(None, style));
        Self { typeface }
    }

    pub fn font(&self, size: f32) -> skia::Font {
        let size = size.max(1.0);
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtents {
        let font = self.font(size);
        let (_, metrics) = font.metrics();
        let (mut width, _) = font.measure_str(text, None);
        let ascent = -metrics.ascent;
        let mut descent = metrics.descent;
        let mut height = ascent + descent;
        // No usable typeface on this host: approximate from the point size.
        if height <= 0.0 {
            descent = size * 0.2;
            height = size * 1.2;
        }
        if width <= 0.0 && !text.is_empty() {
            width = size * 0.6 * text.chars().count() as f32;
        }
        TextExtents { width, height, descent }
    }
}
