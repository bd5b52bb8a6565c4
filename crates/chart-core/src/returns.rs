// File: crates/chart-core/src/returns.rs
// Summary: Return normalizer; indexes aligned prices to percentage return from the first sample.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{AlignedSeries, ReturnSeries, ReturnSet};

/// `(price / base - 1) * 100`.
#[inline]
pub fn percent_return(price: f64, base: f64) -> f64 {
    (price / base - 1.0) * 100.0
}

/// Inverse of [`percent_return`].
#[inline]
pub fn price_from_return(ret: f64, base: f64) -> f64 {
    base * (1.0 + ret / 100.0)
}

/// Convert every aligned price series into returns relative to its first
/// sample and record the maximum return across all instruments.
///
/// Errors: [`ChartError::ZeroBase`] when a first price is exactly zero,
/// [`ChartError::InvalidReturn`] for any NaN/infinite return, and
/// [`ChartError::NoData`] when nothing produced a value.
pub fn compute_returns(aligned: &AlignedSeries) -> Result<ReturnSet> {
    let mut axis_max = f64::NEG_INFINITY;
    let mut series = Vec::with_capacity(aligned.prices.len());

    for (id, prices) in &aligned.prices {
        let Some(&base) = prices.first() else {
            series.push(ReturnSeries { id: id.clone(), values: Vec::new() });
            continue;
        };
        if base == 0.0 {
            return Err(ChartError::ZeroBase { id: id.to_string() });
        }

        let mut values = Vec::with_capacity(prices.len());
        for (index, &p) in prices.iter().enumerate() {
            let r = percent_return(p, base);
            if !r.is_finite() {
                return Err(ChartError::InvalidReturn { id: id.to_string(), index });
            }
            axis_max = axis_max.max(r);
            values.push(r);
        }
        series.push(ReturnSeries { id: id.clone(), values });
    }

    if !axis_max.is_finite() {
        return Err(ChartError::NoData);
    }
    debug!(axis_max, instruments = series.len(), "computed returns");

    Ok(ReturnSet { timeline: aligned.timeline.clone(), series, axis_max })
}
