// File: crates/chart-source/src/error.rs
// Summary: Errors raised while fetching or decoding one instrument's history.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status} for {id}")]
    Status { id: String, status: u16 },

    #[error("malformed chart response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no price data for {id}")]
    EmptyResult { id: String },

    #[error("{id}: {timestamps} timestamps but {closes} closes")]
    LengthMismatch { id: String, timestamps: usize, closes: usize },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}
