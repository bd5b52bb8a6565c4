// File: crates/demo/src/main.rs
// Summary: Fetch the instrument basket, render the one-year return comparison PNG and echo the returns.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::summary::format_summary;
use chart_core::{fetch_all, ComparisonChart, InstrumentId, MonthTicks, SeriesSource};
use chart_source::{CsvSource, YahooSource};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "gem-chart", version, about = "Render a one-year percentage-return comparison chart")]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Read `<id>.csv` files from this directory instead of the network
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// IANA timezone for month ticks and the title timestamp
    #[arg(long)]
    timezone: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(output) = cli.output {
        cfg.output = output;
    }
    if let Some(tz) = cli.timezone {
        cfg.timezone = tz;
    }

    let zone = cfg.zone()?;
    let now = Utc::now().with_timezone(&zone);
    let start = cfg.window_start(&now)?;
    let instruments = cfg.instrument_table();
    let ids: Vec<InstrumentId> = instruments.ids().cloned().collect();

    let source: Box<dyn SeriesSource + Sync> = match &cli.csv_dir {
        Some(dir) => Box::new(CsvSource::new(dir)),
        None => Box::new(YahooSource::new().context("building http client")?),
    };
    info!(instruments = ids.len(), from = %start, to = %now, "fetching basket");
    let raw = fetch_all(source.as_ref(), &ids, start.timestamp(), now.timestamp())?;

    let mut month_ticks = MonthTicks::new(zone);
    if let Some(names) = cfg.month_names.clone() {
        month_ticks = month_ticks.with_month_names(names);
    }
    let chart = ComparisonChart::build(&raw, instruments, &cfg.axis, month_ticks).context("building chart")?;

    let opts = cfg.chart_options(&now);
    chart
        .render_to_png(&opts, &cfg.output)
        .with_context(|| format!("writing {}", cfg.output.display()))?;
    info!(path = %cfg.output.display(), "wrote chart");

    print!("{}", format_summary("1-YEAR RETURNS:", &chart.returns));
    Ok(())
}
