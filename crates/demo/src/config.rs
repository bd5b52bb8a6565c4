// File: crates/demo/src/config.rs
// Summary: TOML configuration for the chart binary; defaults reproduce the GEM basket.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chart_core::palette::parse_hex_color;
use chart_core::{AxisPolicy, ChartOptions, InstrumentStyle, InstrumentTable};
use chrono::{DateTime, Months, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub x_label: String,
    /// IANA zone for month boundaries and the title timestamp.
    pub timezone: String,
    pub lookback_months: u32,
    pub output: PathBuf,
    pub width: i32,
    pub height: i32,
    /// `light` or `dark`.
    pub theme: String,
    /// Twelve localized month abbreviations, January first.
    pub month_names: Option<Vec<String>>,
    pub axis: AxisPolicy,
    pub instruments: Vec<InstrumentConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstrumentConfig {
    pub id: String,
    /// `RRGGBB`
    pub color: String,
}

impl InstrumentConfig {
    fn new(id: &str, color: &str) -> Self {
        Self { id: id.to_string(), color: color.to_string() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Porównanie ETF - 1 rok".to_string(),
            x_label: "Interwał Miesięczny".to_string(),
            timezone: "Europe/Warsaw".to_string(),
            lookback_months: 12,
            output: PathBuf::from("out/gem.png"),
            width: chart_core::types::WIDTH,
            height: chart_core::types::HEIGHT,
            theme: "light".to_string(),
            month_names: None,
            axis: AxisPolicy::default(),
            instruments: vec![
                InstrumentConfig::new("EIMI.L", "0000FF"),
                InstrumentConfig::new("CNDX.L", "FFA500"),
                InstrumentConfig::new("CBU0.L", "008000"),
                InstrumentConfig::new("IB01.L", "FF0000"),
            ],
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.instruments.is_empty() {
            return Err(anyhow!("config lists no instruments"));
        }
        if let Some(names) = &config.month_names {
            if names.len() != 12 {
                warn!(count = names.len(), "month_names needs 12 entries, using default month labels");
            }
        }
        Ok(config)
    }

    pub fn zone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("unknown timezone {:?}: {e}", self.timezone))
    }

    pub fn instrument_table(&self) -> InstrumentTable {
        InstrumentTable::new(
            self.instruments
                .iter()
                .map(|i| {
                    let color = parse_hex_color(&i.color);
                    InstrumentStyle::new(i.id.as_str(), color)
                })
                .collect(),
        )
    }

    /// Start of the lookback window ending at `now`.
    pub fn window_start<Z: TimeZone>(&self, now: &DateTime<Z>) -> Result<DateTime<Z>> {
        now.clone()
            .checked_sub_months(Months::new(self.lookback_months))
            .ok_or_else(|| anyhow!("lookback of {} months is out of range", self.lookback_months))
    }

    /// Render options with the title stamped at `now`.
    pub fn chart_options(&self, now: &DateTime<Tz>) -> ChartOptions {
        let stamp = now.format("%d %b %Y %H:%M %Z");
        ChartOptions {
            width: self.width,
            height: self.height,
            theme: chart_core::theme::find(&self.theme),
            title: format!("{}    {stamp}", self.title),
            x_label: self.x_label.clone(),
            ..ChartOptions::default()
        }
    }
}
