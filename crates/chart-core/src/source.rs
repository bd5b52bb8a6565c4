// File: crates/chart-core/src/source.rs
// Summary: Series source seam and fail-fast concurrent fetch of a basket.

use anyhow::{anyhow, Context};
use tracing::debug;

use crate::series::{InstrumentId, RawSeries};

/// Supplies the raw price history of one instrument over `[start, end]`
/// (Unix seconds).
pub trait SeriesSource {
    fn fetch(&self, id: &InstrumentId, start: i64, end: i64) -> anyhow::Result<RawSeries>;
}

/// Fetch every instrument concurrently, one scoped thread each.
///
/// Results come back in `ids` order regardless of completion order. The
/// first failure (in `ids` order) aborts the whole request; no partial
/// basket is returned.
pub fn fetch_all<S>(source: &S, ids: &[InstrumentId], start: i64, end: i64) -> anyhow::Result<Vec<(InstrumentId, RawSeries)>>
where
    S: SeriesSource + Sync + ?Sized,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = ids
            .iter()
            .map(|id| (id, scope.spawn(move || source.fetch(id, start, end))))
            .collect();

        // Join every handle before the first error return.
        let joined: Vec<_> = handles.into_iter().map(|(id, handle)| (id, handle.join())).collect();

        let mut out = Vec::with_capacity(ids.len());
        for (id, result) in joined {
            let series = result
                .map_err(|_| anyhow!("fetch thread for {id} panicked"))?
                .with_context(|| format!("fetching {id}"))?;
            debug!(%id, points = series.len(), "fetched series");
            out.push((id.clone(), series));
        }
        Ok(out)
    })
}
