// File: crates/chart-examples/src/bin/comparison.rs
// Summary: Offline example that renders a four-instrument return comparison from synthetic closes.

use anyhow::Result;
use chart_core::summary::format_summary;
use chart_core::{AxisPolicy, ChartOptions, ComparisonChart, InstrumentId, InstrumentTable, MonthTicks, RawSeries};

const DAY: i64 = 24 * 3600;
// 2024-01-02T00:00:00Z
const START: i64 = 1_704_153_600;

/// Weekday closes with a drift and a wobble; every 17th day is missing.
fn synthetic(base: f64, drift: f64, wobble: f64, phase: f64) -> RawSeries {
    (0..365)
        .filter(|d| d % 7 < 5)
        .map(|d| {
            let t = d as f64;
            let close = if d % 17 == 0 { f64::NAN } else { base * (1.0 + drift * t / 365.0 + wobble * (t / 20.0 + phase).sin()) };
            (START + d * DAY, close)
        })
        .collect()
}

fn main() -> Result<()> {
    let instruments = InstrumentTable::gem_default();
    let shapes = [(30.0, 0.12, 0.04, 0.0), (900.0, 0.25, 0.06, 1.0), (5.0, 0.03, 0.01, 2.0), (110.0, 0.05, 0.002, 3.0)];
    let raw: Vec<(InstrumentId, RawSeries)> = instruments
        .ids()
        .zip(shapes)
        .map(|(id, (base, drift, wobble, phase))| (id.clone(), synthetic(base, drift, wobble, phase)))
        .collect();

    let chart = ComparisonChart::build(&raw, instruments, &AxisPolicy::default(), MonthTicks::new(chrono::Utc))?;
    let opts = ChartOptions {
        title: "Synthetic ETF basket - 1 year".to_string(),
        x_label: "Month".to_string(),
        ..ChartOptions::default()
    };

    let out = std::path::PathBuf::from("target/out/example_comparison.png");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());
    print!("{}", format_summary("1-YEAR RETURNS:", &chart.returns));
    Ok(())
}
