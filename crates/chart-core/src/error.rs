// File: crates/chart-core/src/error.rs
// Summary: Error kinds raised while building a comparison chart.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Hard failures of a chart-generation attempt. None of these produce a
/// partial chart; soft degeneracies (axis range, label band) are repaired in
/// place and never show up here.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Empty base timeline, or no timestamp at which every instrument is known.
    #[error("insufficient data: no complete sample across all instruments")]
    InsufficientData,

    #[error("base price for {id} is zero")]
    ZeroBase { id: String },

    #[error("invalid return for {id} at sample {index}")]
    InvalidReturn { id: String, index: usize },

    #[error("no instrument produced any return value")]
    NoData,

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
