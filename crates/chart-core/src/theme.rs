// File: crates/chart-core/src/theme.rs
// Summary: Chart color themes; `light` matches the classic white report look.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Dashed 0% reference line.
    pub zero_line: skia::Color,
    /// Translucent fill behind the legend rows.
    pub legend_background: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_rgb(220, 220, 220),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            zero_line: skia::Color::from_argb(180, 128, 128, 128),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_rgb(22, 22, 26),
            grid: skia::Color::from_rgb(46, 46, 52),
            axis_line: skia::Color::from_rgb(170, 170, 180),
            axis_label: skia::Color::from_rgb(230, 230, 240),
            tick: skia::Color::from_rgb(140, 140, 150),
            zero_line: skia::Color::from_argb(180, 150, 150, 160),
            legend_background: skia::Color::from_argb(230, 30, 30, 36),
        }
    }
}

pub fn presets() -> [Theme; 2] {
    [Theme::light(), Theme::dark()]
}

/// Theme named `name` (case-insensitive); unknown names fall back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
