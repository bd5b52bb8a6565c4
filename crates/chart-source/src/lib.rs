// File: crates/chart-source/src/lib.rs
// Summary: Series sources feeding the chart core: Yahoo Finance chart API and a CSV directory.

pub mod csv_dir;
pub mod error;
pub mod yahoo;

pub use csv_dir::{read_series, CsvSource};
pub use error::SourceError;
pub use yahoo::{parse_chart_response, YahooSource};
