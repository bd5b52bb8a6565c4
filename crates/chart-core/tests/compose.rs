// File: crates/chart-core/tests/compose.rs
// Purpose: Drive the comparison chart composer against a recording canvas and a real raster surface.

use chart_core::geometry::{Point, RectF};
use chart_core::summary::format_summary;
use chart_core::{
    AxisPolicy, Canvas, ChartError, ChartOptions, ComparisonChart, InstrumentId, InstrumentStyle, InstrumentTable,
    LabelSpan, LineStyle, MonthTicks, RawSeries, TextExtents, TextStyle,
};
use skia_safe::Color;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Color),
    Rect(Color),
    Line(LineStyle),
    Polyline(Color, usize),
    Text { x: f32, y: f32, text: String, color: Color },
}

struct RecordingCanvas {
    w: f32,
    h: f32,
    ops: Vec<Op>,
}

impl RecordingCanvas {
    fn new(w: f32, h: f32) -> Self {
        Self { w, h, ops: Vec::new() }
    }

    fn texts_at(&self, x_at: f32) -> Vec<(f32, String, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { x, y, text, color } if (*x - x_at).abs() < 1e-3 => Some((*y, text.clone(), *color)),
                _ => None,
            })
            .collect()
    }
}

const EXT_H: f32 = 14.0;
const EXT_D: f32 = 3.0;

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f32, f32) {
        (self.w, self.h)
    }
    fn clear(&mut self, color: Color) {
        self.ops.push(Op::Clear(color));
    }
    fn fill_rect(&mut self, color: Color, _rect: RectF) {
        self.ops.push(Op::Rect(color));
    }
    fn stroke_line(&mut self, style: &LineStyle, _from: Point, _to: Point) {
        self.ops.push(Op::Line(*style));
    }
    fn stroke_polyline(&mut self, style: &LineStyle, points: &[Point]) {
        self.ops.push(Op::Polyline(style.color, points.len()));
    }
    fn fill_text(&mut self, style: &TextStyle, at: Point, text: &str) {
        self.ops.push(Op::Text { x: at.x, y: at.y, text: text.to_string(), color: style.color });
    }
    fn measure_text(&self, _style: &TextStyle, text: &str) -> TextExtents {
        TextExtents { width: 7.0 * text.chars().count() as f32, height: EXT_H, descent: EXT_D }
    }
}

const DAY: i64 = 24 * 3600;
// 2024-01-01T00:00:00Z
const T0: i64 = 1_704_067_200;

/// Linear walk from `start` to `end` across `n` daily samples.
fn walk(start: f64, end: f64, n: usize) -> RawSeries {
    (0..n)
        .map(|i| {
            let f = i as f64 / (n - 1) as f64;
            (T0 + i as i64 * DAY, start + (end - start) * f)
        })
        .collect()
}

fn basket() -> (Vec<(InstrumentId, RawSeries)>, InstrumentTable) {
    let raw = vec![
        (InstrumentId::new("UP"), walk(100.0, 120.0, 90)),
        (InstrumentId::new("FLAT"), walk(50.0, 52.5, 90)),
        (InstrumentId::new("DOWN"), walk(10.0, 9.0, 90)),
    ];
    let table = InstrumentTable::new(vec![
        InstrumentStyle::from_hex("UP", "0000FF"),
        InstrumentStyle::from_hex("FLAT", "FFA500"),
        InstrumentStyle::from_hex("DOWN", "#FF0000"),
    ]);
    (raw, table)
}

fn chart() -> ComparisonChart<chrono::Utc> {
    let (raw, table) = basket();
    ComparisonChart::build(&raw, table, &AxisPolicy::default(), MonthTicks::new(chrono::Utc)).expect("build")
}

#[test]
fn build_derives_axis_from_max_return() {
    let c = chart();
    assert_eq!(c.returns.timeline.len(), 90);
    assert_eq!(c.y_axis.min, -25.0);
    let expected = c.returns.axis_max + (c.returns.axis_max + 25.0) * 0.15;
    assert!((c.y_axis.max - expected).abs() < 1e-9);
    assert!((c.returns.axis_max - 20.0).abs() < 1e-9);
}

#[test]
fn build_rejects_zero_base() {
    let raw = vec![
        (InstrumentId::new("A"), RawSeries::from_points(&[1, 2], &[0.0, 1.0])),
        (InstrumentId::new("B"), RawSeries::from_points(&[1, 2], &[1.0, 1.0])),
    ];
    let err = ComparisonChart::build(&raw, InstrumentTable::default(), &AxisPolicy::default(), MonthTicks::new(chrono::Utc))
        .err()
        .expect("zero base must fail");
    assert!(matches!(err, ChartError::ZeroBase { ref id } if id == "A"));
}

#[test]
fn draw_emits_one_polyline_per_instrument() {
    let c = chart();
    let mut canvas = RecordingCanvas::new(1200.0, 600.0);
    c.draw(&mut canvas, &ChartOptions::default());

    assert_eq!(canvas.ops.first(), Some(&Op::Clear(ChartOptions::default().theme.background)));
    let lines: Vec<_> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Polyline(color, n) => Some((*color, *n)),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (Color::from_rgb(0, 0, 255), 90),
            (Color::from_rgb(255, 165, 0), 90),
            (Color::from_rgb(255, 0, 0), 90),
        ]
    );
    assert!(
        canvas.ops.iter().any(|op| matches!(op, Op::Line(s) if s.dash.is_some())),
        "zero line is dashed"
    );
    assert!(canvas.ops.iter().any(|op| matches!(op, Op::Rect(_))), "legend background");
}

#[test]
fn legend_lists_final_returns_in_basket_order() {
    let c = chart();
    let mut canvas = RecordingCanvas::new(1200.0, 600.0);
    c.draw(&mut canvas, &ChartOptions::default());
    let legend: Vec<String> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } if text.contains(": ") => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(legend, vec!["UP: +20.00%", "FLAT: +5.00%", "DOWN: -10.00%"]);
}

#[test]
fn annotations_clear_tick_labels_and_each_other() {
    let c = chart();
    let opts = ChartOptions::default();
    let mut canvas = RecordingCanvas::new(1200.0, 600.0);
    let placed = c.draw(&mut canvas, &opts);
    assert_eq!(placed.len(), 3);

    let axis_x = 1200.0 - opts.insets.right as f32;
    let ext = |text: &str| TextExtents { width: 7.0 * text.len() as f32, height: EXT_H, descent: EXT_D };
    let pad = opts.label_gap / 2.0;

    let ticks = canvas.texts_at(axis_x + opts.tick_padding);
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|(_, t, _)| t.ends_with('%')));
    let reserved: Vec<LabelSpan> = ticks.iter().map(|(y, t, _)| LabelSpan::around(*y, ext(t), pad)).collect();

    let top = opts.insets.top as f32;
    let bottom = 600.0 - opts.insets.bottom as f32;
    for (i, a) in placed.iter().enumerate() {
        assert!(a.span.min >= top && a.span.max <= bottom, "{} leaves the plot", a.text);
        for r in &reserved {
            assert!(!a.span.overlaps(r), "{} overlaps a tick label", a.text);
        }
        for b in &placed[i + 1..] {
            assert!(!a.span.overlaps(&b.span), "{} overlaps {}", a.text, b.text);
        }
    }

    // Drawn where placed, in the instrument's color.
    let drawn = canvas.texts_at(axis_x + opts.label_spacing);
    assert_eq!(drawn.len(), 3);
    for label in &placed {
        assert!(drawn.iter().any(|(y, t, col)| *y == label.y && *t == label.text && *col == label.color));
    }
    let mut texts: Vec<&str> = placed.iter().map(|p| p.text.as_str()).collect();
    texts.sort();
    assert_eq!(texts, vec!["DOWN -10.00%", "FLAT +5.00%", "UP +20.00%"]);
}

#[test]
fn month_labels_cover_the_timeline() {
    let c = chart();
    let mut canvas = RecordingCanvas::new(1200.0, 600.0);
    c.draw(&mut canvas, &ChartOptions::default());
    let months: Vec<String> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } if text.ends_with(" 2024") => Some(text.clone()),
            _ => None,
        })
        .collect();
    // Timeline runs Jan 1 .. Mar 30, padded by 45 days into May.
    assert_eq!(months, vec!["Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024"]);
}

#[test]
fn labels_off_draws_no_text() {
    let c = chart();
    let mut canvas = RecordingCanvas::new(1200.0, 600.0);
    let opts = ChartOptions { draw_labels: false, title: "t".into(), ..ChartOptions::default() };
    let placed = c.draw(&mut canvas, &opts);
    assert_eq!(placed.len(), 3);
    assert!(!canvas.ops.iter().any(|op| matches!(op, Op::Text { .. })));
}

#[test]
fn render_png_creates_parent_dirs() {
    let c = chart();
    let opts = ChartOptions { draw_labels: false, ..ChartOptions::default() };
    let out = std::path::PathBuf::from("target/test_out/compose/nested/gem.png");
    let _ = std::fs::remove_dir_all("target/test_out/compose");

    c.render_to_png(&opts, &out).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1200, 600));
    assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
}

#[test]
fn summary_block_is_aligned() {
    let c = chart();
    let text = format_summary("1-YEAR RETURNS:", &c.returns);
    let rule = "=".repeat(60);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            rule.as_str(),
            "1-YEAR RETURNS:",
            rule.as_str(),
            "UP        :  +20.00%",
            "FLAT      :   +5.00%",
            "DOWN      :  -10.00%",
            rule.as_str(),
        ]
    );
}
