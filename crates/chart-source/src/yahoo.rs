// File: crates/chart-source/src/yahoo.rs
// Summary: Daily closes from the Yahoo Finance v8 chart endpoint over blocking HTTP.

use std::time::Duration;

use chart_core::{InstrumentId, RawSeries, SeriesSource};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::error::SourceError;

pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com/v8/finance/chart/";
const USER_AGENT: &str = "gem-chart/0.1";
const TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decode a chart response body into a raw series. Null closes become NaN
/// (missing trading day).
pub fn parse_chart_response(id: &InstrumentId, body: &str) -> Result<RawSeries, SourceError> {
    let payload: ChartResponse = serde_json::from_str(body)?;
    let empty = || SourceError::EmptyResult { id: id.to_string() };

    let result = payload.chart.result.and_then(|r| r.into_iter().next()).ok_or_else(empty)?;
    if result.timestamp.is_empty() {
        return Err(empty());
    }
    let quote = result.indicators.quote.into_iter().next().ok_or_else(empty)?;
    if quote.close.len() != result.timestamp.len() {
        return Err(SourceError::LengthMismatch {
            id: id.to_string(),
            timestamps: result.timestamp.len(),
            closes: quote.close.len(),
        });
    }

    Ok(result
        .timestamp
        .into_iter()
        .zip(quote.close)
        .map(|(ts, close)| (ts, close.unwrap_or(f64::NAN)))
        .collect())
}

pub struct YahooSource {
    client: Client,
    base_url: Url,
}

impl YahooSource {
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at another chart endpoint (a mirror or a local stub).
    pub fn with_base_url(base_url: &str) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url).map_err(|e| SourceError::Parse(format!("base url {base_url:?}: {e}")))?;
        let client = Client::builder().timeout(TIMEOUT).user_agent(USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    /// Daily chart URL for `id` over `[start, end]`. The id is path-escaped.
    pub fn chart_url(&self, id: &InstrumentId, start: i64, end: i64) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Parse(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        url.query_pairs_mut()
            .append_pair("period1", &start.to_string())
            .append_pair("period2", &end.to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "history")
            .append_pair("includeAdjustedClose", "true");
        Ok(url)
    }

    fn fetch_series(&self, id: &InstrumentId, start: i64, end: i64) -> Result<RawSeries, SourceError> {
        let url = self.chart_url(id, start, end)?;
        debug!(%id, %url, "requesting chart");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(SourceError::Status { id: id.to_string(), status: status.as_u16() });
        }
        let body = resp.text()?;
        let series = parse_chart_response(id, &body)?;
        debug!(%id, points = series.len(), "decoded chart");
        Ok(series)
    }
}

impl SeriesSource for YahooSource {
    fn fetch(&self, id: &InstrumentId, start: i64, end: i64) -> anyhow::Result<RawSeries> {
        Ok(self.fetch_series(id, start, end)?)
    }
}
