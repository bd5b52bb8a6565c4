// File: crates/chart-core/src/align.rs
// Summary: Series aligner; resamples every instrument onto the base timeline with forward-fill.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{AlignedSeries, InstrumentId, RawSeries};

/// Align `inputs` onto one shared timeline.
///
/// The timestamps of the first non-empty series form the base timeline;
/// every other series is looked up at exactly those timestamps. A missing or
/// NaN price carries the instrument's last known price forward. Leading
/// samples where any instrument has never been seen are trimmed.
///
/// Fails with [`ChartError::InsufficientData`] when there is no base
/// timeline or no sample at which all instruments are known.
pub fn align_series(inputs: &[(InstrumentId, RawSeries)]) -> Result<AlignedSeries> {
    let base: Vec<i64> = inputs
        .iter()
        .map(|(_, s)| s)
        .find(|s| !s.is_empty())
        .map(|s| s.timestamps().collect())
        .unwrap_or_default();
    if base.is_empty() {
        return Err(ChartError::InsufficientData);
    }

    let filled: Vec<Vec<Option<f64>>> = inputs
        .iter()
        .map(|(_, series)| forward_fill(&base, series))
        .collect();

    let start = (0..base.len())
        .find(|&i| filled.iter().all(|vals| vals[i].is_some()))
        .ok_or(ChartError::InsufficientData)?;

    let prices = inputs
        .iter()
        .zip(filled)
        .map(|((id, _), vals)| (id.clone(), vals[start..].iter().flatten().copied().collect()))
        .collect();

    debug!(base_len = base.len(), trim = start, instruments = inputs.len(), "aligned series");

    Ok(AlignedSeries { timeline: base[start..].to_vec(), prices })
}

/// Sample `series` at each base timestamp, carrying the last known price
/// forward. `None` until the first known price.
pub fn forward_fill(base: &[i64], series: &RawSeries) -> Vec<Option<f64>> {
    let mut last = None;
    base.iter()
        .map(|&ts| {
            if let Some(p) = series.price_at(ts) {
                last = Some(p);
            }
            last
        })
        .collect()
}
