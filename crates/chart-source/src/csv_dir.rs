// File: crates/chart-source/src/csv_dir.rs
// Summary: Offline source reading `<dir>/<id>.csv` files of timestamp/close rows.

use std::io::Read;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use anyhow::Context;
use chart_core::{InstrumentId, RawSeries, SeriesSource};
use tracing::debug;

use crate::error::SourceError;

const TIME_HEADERS: &[&str] = &["timestamp", "time", "date", "open_time", "datetime"];
const CLOSE_HEADERS: &[&str] = &["close", "adj_close", "c"];

pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &InstrumentId) -> PathBuf {
        self.dir.join(format!("{id}.csv"))
    }
}

impl SeriesSource for CsvSource {
    fn fetch(&self, id: &InstrumentId, start: i64, end: i64) -> anyhow::Result<RawSeries> {
        let path = self.path_for(id);
        let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let series = read_series(file, start..=end).with_context(|| format!("reading {}", path.display()))?;
        debug!(%id, points = series.len(), path = %path.display(), "loaded csv series");
        Ok(series)
    }
}

/// Read `timestamp,close` rows, keeping those inside `window` (Unix seconds).
/// Blank or unparsable closes become NaN; epoch milliseconds are converted.
pub fn read_series<R: Read>(input: R, window: RangeInclusive<i64>) -> Result<RawSeries, SourceError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect();
    let column = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = column(TIME_HEADERS).ok_or_else(|| SourceError::Parse(format!("no timestamp column in {headers:?}")))?;
    let i_close = column(CLOSE_HEADERS).ok_or_else(|| SourceError::Parse(format!("no close column in {headers:?}")))?;

    let mut series = RawSeries::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw_ts = rec.get(i_time).unwrap_or_default();
        let ts = parse_epoch(raw_ts).ok_or_else(|| SourceError::Parse(format!("row {}: bad timestamp {raw_ts:?}", row + 1)))?;
        if !window.contains(&ts) {
            continue;
        }
        let close = rec.get(i_close).and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN);
        series.insert(ts, close);
    }
    Ok(series)
}

/// Integer epoch seconds; values above 10^12 are taken as milliseconds.
fn parse_epoch(s: &str) -> Option<i64> {
    let n = s.trim().parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        return Some(n / 1000);
    }
    Some(n)
}

