// File: crates/chart-core/src/series.rs
// Summary: Series model: instrument ids, raw price series, aligned prices and indexed returns.
// Notes:
// - Missing trading days are stored as NaN in `RawSeries`; lookups treat NaN
//   and absent timestamps the same way.
// - `AlignedSeries` and `ReturnSet` keep instruments in input order so that
//   colors, legend rows and the console summary stay stable.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque instrument key (ticker). Stable across all stages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width/alignment flags apply.
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unix timestamp (seconds) -> closing price for one instrument.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawSeries {
    points: BTreeMap<i64, f64>,
}

impl RawSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parallel timestamp/price slices. Extra elements of the
    /// longer slice are ignored; a repeated timestamp keeps the last price.
    pub fn from_points(timestamps: &[i64], prices: &[f64]) -> Self {
        let points = timestamps.iter().copied().zip(prices.iter().copied()).collect();
        Self { points }
    }

    pub fn insert(&mut self, ts: i64, price: f64) {
        self.points.insert(ts, price);
    }

    /// Known price at exactly `ts`. NaN-sentinel days count as missing.
    pub fn price_at(&self, ts: i64) -> Option<f64> {
        self.points.get(&ts).copied().filter(|p| !p.is_nan())
    }

    /// All timestamps present in the series, ascending (missing days included).
    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(i64, f64)> for RawSeries {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// Prices of every instrument sampled on one shared, trimmed timeline.
/// Contract: each `prices[i].1` has `timeline.len()` finite-or-real values, none unknown.
#[derive(Clone, Debug)]
pub struct AlignedSeries {
    pub timeline: Vec<i64>,
    pub prices: Vec<(InstrumentId, Vec<f64>)>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// Percentage return of one instrument relative to its first aligned sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnSeries {
    pub id: InstrumentId,
    pub values: Vec<f64>,
}

impl ReturnSeries {
    /// Return at the last sample, if any.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Normalized output of one chart generation: shared timeline, one return
/// series per instrument, and the maximum return seen across all of them.
#[derive(Clone, Debug)]
pub struct ReturnSet {
    pub timeline: Vec<i64>,
    pub series: Vec<ReturnSeries>,
    pub axis_max: f64,
}

impl ReturnSet {
    /// `(id, final return)` per instrument, skipping empty series.
    pub fn final_returns(&self) -> Vec<(&InstrumentId, f64)> {
        self.series
            .iter()
            .filter_map(|s| s.last().map(|v| (&s.id, v)))
            .collect()
    }

    /// Inclusive timestamp range of the timeline.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        Some((*self.timeline.first()?, *self.timeline.last()?))
    }
}
