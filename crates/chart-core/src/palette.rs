// File: crates/chart-core/src/palette.rs
// Summary: Instrument table: the ordered basket and each instrument's display color.

use skia_safe as skia;

pub use skia_safe::Color;

use crate::series::InstrumentId;

#[derive(Clone, Debug, PartialEq)]
pub struct InstrumentStyle {
    pub id: InstrumentId,
    pub color: skia::Color,
}

impl InstrumentStyle {
    pub fn new(id: impl Into<InstrumentId>, color: skia::Color) -> Self {
        Self { id: id.into(), color }
    }

    pub fn from_hex(id: impl Into<InstrumentId>, hex: &str) -> Self {
        Self::new(id, parse_hex_color(hex))
    }
}

/// Ordered `instrument -> style` table injected into the composer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstrumentTable {
    entries: Vec<InstrumentStyle>,
}

impl InstrumentTable {
    pub fn new(entries: Vec<InstrumentStyle>) -> Self {
        Self { entries }
    }

    /// EIMI / CNDX / CBU0 / IB01 basket in blue, orange, green, red.
    pub fn gem_default() -> Self {
        Self::new(vec![
            InstrumentStyle::from_hex("EIMI.L", "0000FF"),
            InstrumentStyle::from_hex("CNDX.L", "FFA500"),
            InstrumentStyle::from_hex("CBU0.L", "008000"),
            InstrumentStyle::from_hex("IB01.L", "FF0000"),
        ])
    }

    pub fn ids(&self) -> impl Iterator<Item = &InstrumentId> {
        self.entries.iter().map(|e| &e.id)
    }

    /// Color for `id`; instruments missing from the table draw gray.
    pub fn color_for(&self, id: &InstrumentId) -> skia::Color {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.color)
            .unwrap_or(skia::Color::GRAY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse `RRGGBB` (optionally `#`-prefixed) into an opaque color.
/// Malformed input yields opaque black.
pub fn parse_hex_color(hex: &str) -> skia::Color {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return skia::Color::BLACK;
    }
    match u32::from_str_radix(hex, 16) {
        Ok(v) => skia::Color::from_argb(255, (v >> 16) as u8, (v >> 8 & 0xFF) as u8, (v & 0xFF) as u8),
        Err(_) => skia::Color::BLACK,
    }
}
