// File: crates/chart-core/src/chart.rs
// Summary: Comparison chart composer and headless PNG rendering using Skia CPU raster surfaces.

use std::fmt;
use std::path::Path;

use chrono::TimeZone;
use skia_safe as skia;
use tracing::debug;

use crate::align::align_series;
use crate::axis::{AxisPolicy, AxisRange};
use crate::canvas::{Canvas, LineStyle, TextExtents, TextStyle};
use crate::error::Result;
use crate::geometry::{LinearScale, Point, RectF};
use crate::palette::InstrumentTable;
use crate::placement::{place_labels, LabelLayout, LabelSpan, PlacedLabel, PlacementRequest};
use crate::raster::RasterCanvas;
use crate::returns::compute_returns;
use crate::series::{InstrumentId, RawSeries, ReturnSet};
use crate::theme::Theme;
use crate::ticks::{MonthTicks, PercentTicks, Tick, Ticker};
use crate::types::{Insets, HEIGHT, WIDTH, X_PADDING_SECS};

pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    pub x_label: String,
    pub font_size: f32,
    pub title_size: f32,
    pub line_width: f32,
    /// Right-side tick mark length, drawn into the plot.
    pub tick_length: f32,
    /// Distance from the right axis to tick label text.
    pub tick_padding: f32,
    /// Distance from the right axis to series annotation text.
    pub label_spacing: f32,
    /// Minimum vertical gap between two right-side labels.
    pub label_gap: f32,
    /// Legend offset from the plot's top-left corner.
    pub legend_offset: f32,
    /// Skip all text; useful for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            title: String::new(),
            x_label: String::new(),
            font_size: 12.0,
            title_size: 14.0,
            line_width: 1.5,
            tick_length: 4.0,
            tick_padding: 6.0,
            label_spacing: 20.0,
            label_gap: 2.0,
            legend_offset: 6.0,
            draw_labels: true,
        }
    }
}

/// `"EIMI.L: +12.34%"`
pub fn legend_label(id: &InstrumentId, ret: f64) -> String {
    format!("{id}: {ret:+.2}%")
}

/// `"EIMI.L +12.34%"`
pub fn annotation_label(id: &InstrumentId, ret: f64) -> String {
    format!("{id} {ret:+.2}%")
}

/// Offset that moves a baseline down so the text sits centered on a row.
fn center_offset(e: TextExtents) -> f32 {
    (e.ascent() - e.descent) / 2.0
}

/// One-year percentage-return comparison of a basket of instruments.
pub struct ComparisonChart<Tz: TimeZone> {
    pub returns: ReturnSet,
    pub instruments: InstrumentTable,
    pub y_axis: AxisRange,
    pub month_ticks: MonthTicks<Tz>,
    pub value_ticks: PercentTicks,
}

impl<Tz> ComparisonChart<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    /// Align `raw`, index it to returns and derive the value axis. Any data
    /// error aborts before anything is drawn.
    pub fn build(
        raw: &[(InstrumentId, RawSeries)],
        instruments: InstrumentTable,
        policy: &AxisPolicy,
        month_ticks: MonthTicks<Tz>,
    ) -> Result<Self> {
        let aligned = align_series(raw)?;
        let returns = compute_returns(&aligned)?;
        let y_axis = policy.range_for(returns.axis_max);
        debug!(y_min = y_axis.min, y_max = y_axis.max, samples = returns.timeline.len(), "chart axes");
        Ok(Self {
            returns,
            instruments,
            y_axis,
            month_ticks,
            value_ticks: PercentTicks::default(),
        })
    }

    fn x_range(&self) -> (f64, f64) {
        let (first, last) = self.returns.time_range().unwrap_or((0, 0));
        (first as f64, (last + X_PADDING_SECS) as f64)
    }

    /// Draw the full chart onto `canvas`. Returns the right-side series
    /// annotations as placed.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, opts: &ChartOptions) -> Vec<PlacedLabel<skia::Color>> {
        let theme = &opts.theme;
        let (w, h) = canvas.size();
        let plot = opts.insets.plot_rect(w, h);
        let (x_min, x_max) = self.x_range();
        let xs = LinearScale::new(x_min, x_max, plot.left, plot.right);
        let ys = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);
        let text_style = TextStyle::new(opts.font_size, theme.axis_label);

        canvas.clear(theme.background);

        if opts.draw_labels && !opts.title.is_empty() {
            let title_style = TextStyle::new(opts.title_size, theme.axis_label);
            canvas.fill_text(&title_style, Point::new(plot.left, plot.top - 14.0), &opts.title);
        }

        // Grid
        let grid = LineStyle::solid(theme.grid, 0.5);
        let month_ticks = self.month_ticks.ticks(x_min, x_max);
        let value_ticks = self.value_ticks.ticks(self.y_axis.min, self.y_axis.max);
        for t in &month_ticks {
            let x = xs.to_px(t.value);
            canvas.stroke_line(&grid, Point::new(x, plot.top), Point::new(x, plot.bottom));
        }
        for t in value_ticks.iter().filter(|t| !t.minor) {
            let y = ys.to_px(t.value);
            canvas.stroke_line(&grid, Point::new(plot.left, y), Point::new(plot.right, y));
        }

        // Frame and time axis
        let axis = LineStyle::solid(theme.axis_line, 0.5);
        canvas.stroke_line(&axis, Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom));
        canvas.stroke_line(&axis, Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom));
        let tick_line = LineStyle::solid(theme.tick, 0.5);
        for t in &month_ticks {
            let x = xs.to_px(t.value);
            canvas.stroke_line(&tick_line, Point::new(x, plot.bottom), Point::new(x, plot.bottom + opts.tick_length));
            if opts.draw_labels {
                let e = canvas.measure_text(&text_style, &t.label);
                canvas.fill_text(&text_style, Point::new(x - e.width / 2.0, plot.bottom + opts.tick_length + e.height), &t.label);
            }
        }
        if opts.draw_labels && !opts.x_label.is_empty() {
            let e = canvas.measure_text(&text_style, &opts.x_label);
            canvas.fill_text(&text_style, Point::new(plot.right - e.width, h - e.descent - 6.0), &opts.x_label);
        }

        if self.y_axis.min < 0.0 && self.y_axis.max > 0.0 {
            let y0 = ys.to_px(0.0);
            let zero = LineStyle::dashed(theme.zero_line, 0.8, 4.0, 3.0);
            canvas.stroke_line(&zero, Point::new(plot.left, y0), Point::new(plot.right, y0));
        }

        // Series
        for s in &self.returns.series {
            let pts: Vec<Point> = self
                .returns
                .timeline
                .iter()
                .zip(&s.values)
                .map(|(&t, &v)| Point::new(xs.to_px(t as f64), ys.to_px(v)))
                .collect();
            let style = LineStyle::solid(self.instruments.color_for(&s.id), opts.line_width);
            canvas.stroke_polyline(&style, &pts);
        }

        if opts.draw_labels {
            self.draw_legend(canvas, opts, plot, &text_style);
        }

        self.draw_right_annotations(canvas, opts, plot, &ys, &value_ticks, &text_style)
    }

    fn draw_legend<C: Canvas + ?Sized>(&self, canvas: &mut C, opts: &ChartOptions, plot: RectF, style: &TextStyle) {
        let entries: Vec<(String, skia::Color)> = self
            .returns
            .final_returns()
            .into_iter()
            .map(|(id, ret)| (legend_label(id, ret), self.instruments.color_for(id)))
            .collect();
        if entries.is_empty() {
            return;
        }

        let swatch = 20.0;
        let extents: Vec<TextExtents> = entries.iter().map(|(t, _)| canvas.measure_text(style, t)).collect();
        let row = extents.iter().map(|e| e.height).fold(0.0f32, f32::max) + 2.0;
        let text_w = extents.iter().map(|e| e.width).fold(0.0f32, f32::max);
        let left = plot.left + opts.legend_offset;
        let top = plot.top + opts.legend_offset;
        let bg = RectF::from_ltwh(left, top, swatch + 12.0 + text_w, row * entries.len() as f32 + 6.0);
        canvas.fill_rect(opts.theme.legend_background, bg);

        for (i, ((text, color), e)) in entries.iter().zip(&extents).enumerate() {
            let mid = top + 3.0 + row * (i as f32 + 0.5);
            let line = LineStyle::solid(*color, opts.line_width);
            canvas.stroke_line(&line, Point::new(left + 4.0, mid), Point::new(left + 4.0 + swatch, mid));
            canvas.fill_text(style, Point::new(left + swatch + 8.0, mid + center_offset(*e)), text);
        }
    }

    /// Right axis line, tick marks and labels, then the per-series final
    /// return labels placed clear of the tick labels and of each other.
    fn draw_right_annotations<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        opts: &ChartOptions,
        plot: RectF,
        ys: &LinearScale,
        value_ticks: &[Tick],
        style: &TextStyle,
    ) -> Vec<PlacedLabel<skia::Color>> {
        let axis_x = plot.right;
        let axis = LineStyle::solid(opts.theme.axis_line, 0.5);
        let tick_line = LineStyle::solid(opts.theme.tick, 0.5);
        canvas.stroke_line(&axis, Point::new(axis_x, plot.top), Point::new(axis_x, plot.bottom));

        let pad = opts.label_gap / 2.0;
        let mut reserved = Vec::new();
        for t in value_ticks.iter().filter(|t| !t.minor && !t.label.is_empty()) {
            let y = ys.to_px(t.value);
            canvas.stroke_line(&tick_line, Point::new(axis_x, y), Point::new(axis_x - opts.tick_length, y));
            let e = canvas.measure_text(style, &t.label);
            let baseline = y + center_offset(e);
            if opts.draw_labels {
                canvas.fill_text(style, Point::new(axis_x + opts.tick_padding, baseline), &t.label);
            }
            reserved.push(LabelSpan::around(baseline, e, pad));
        }

        let requests: Vec<PlacementRequest<skia::Color>> = self
            .returns
            .final_returns()
            .into_iter()
            .map(|(id, ret)| {
                let text = annotation_label(id, ret);
                let extents = canvas.measure_text(style, &text);
                PlacementRequest { value: ret, text, color: self.instruments.color_for(id), extents }
            })
            .collect();
        let Some(sample) = requests.first().map(|r| r.extents) else {
            return Vec::new();
        };

        let layout = LabelLayout { min_y: plot.top, max_y: plot.bottom, gap: opts.label_gap };
        let offset = center_offset(sample);
        let placed = place_labels(&requests, &reserved, &layout, |v| ys.to_px(v) + offset);

        if opts.draw_labels {
            for label in &placed {
                let s = style.with_color(label.color);
                canvas.fill_text(&s, Point::new(axis_x + opts.label_spacing, label.y), &label.text);
            }
        }
        placed
    }

    /// Render to PNG bytes on a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &ChartOptions) -> Result<Vec<u8>> {
        let mut canvas = RasterCanvas::new(opts.width, opts.height)?;
        self.draw(&mut canvas, opts);
        canvas.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path`, creating missing parent directories.
    pub fn render_to_png(&self, opts: &ChartOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        debug!(path = %path.display(), "wrote chart");
        Ok(())
    }
}
