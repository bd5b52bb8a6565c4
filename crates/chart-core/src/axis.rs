// File: crates/chart-core/src/axis.rs
// Summary: Value-axis range derivation from the largest return, with degenerate fallback.

use serde::Deserialize;
use tracing::warn;

/// Value bounds of an axis. Contract: `max > min` once produced by [`AxisPolicy::range_for`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// How the value-axis range is derived from the largest observed return.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisPolicy {
    /// Fixed lower bound of the axis, in percent.
    pub floor: f64,
    /// Headroom above the maximum, as a fraction of `max - floor`.
    pub margin_ratio: f64,
    /// Lift applied when the maximum sits below the floor.
    pub below_floor_lift: f64,
    pub fallback_min: f64,
    pub fallback_max: f64,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        Self {
            floor: -25.0,
            margin_ratio: 0.15,
            below_floor_lift: 10.0,
            fallback_min: -25.0,
            fallback_max: 25.0,
        }
    }
}

impl AxisPolicy {
    /// Value-axis range for a chart whose largest return is `axis_max`.
    ///
    /// - `axis_max < floor`: `[floor, floor + lift]`.
    /// - otherwise: `[floor, axis_max + (axis_max - floor) * margin_ratio]`,
    ///   a non-finite margin counting as zero.
    /// - a non-finite or non-positive result falls back to `[floor, floor + lift]`,
    ///   and if that is still degenerate to `[fallback_min, fallback_max]`.
    pub fn range_for(&self, axis_max: f64) -> AxisRange {
        let mut min = self.floor;
        let mut max = if axis_max < min {
            min + self.below_floor_lift
        } else {
            let mut margin = (axis_max - min) * self.margin_ratio;
            if !margin.is_finite() {
                margin = 0.0;
            }
            axis_max + margin
        };
        if max <= min || !max.is_finite() {
            warn!(axis_max, "value axis max not above floor, lifting");
            max = min + self.below_floor_lift;
        }
        if !min.is_finite() {
            min = self.fallback_min;
        }
        let delta = max - min;
        if !delta.is_finite() || delta <= 0.0 {
            warn!(axis_max, "degenerate value axis, using fallback range");
            return AxisRange { min: self.fallback_min, max: self.fallback_max };
        }
        AxisRange { min, max }
    }
}
