// File: crates/chart-core/src/placement.rs
// Summary: Collision-avoiding vertical placement of axis annotation labels.
// Notes:
// - Coordinates are canvas pixels, y growing downward. A label anchored at
//   `y` is drawn with its baseline at `y`, so it covers `y - ascent ..= y + descent`.
// - Placement is a pure function of its inputs: same requests, spans and
//   layout always give bit-identical positions.

use tracing::warn;

use crate::canvas::TextExtents;

/// Number of displacement steps tried on each side of the desired position.
pub const MAX_STEPS: usize = 6;

/// Vertical extent of a rendered label plus padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSpan {
    pub min: f32,
    pub max: f32,
}

impl LabelSpan {
    /// Span of a label with baseline at `y`, inflated by `pad` on both sides.
    pub fn around(y: f32, extents: TextExtents, pad: f32) -> Self {
        Self {
            min: y - extents.ascent() - pad,
            max: y + extents.descent + pad,
        }
    }

    pub fn overlaps(&self, other: &LabelSpan) -> bool {
        self.min < other.max && other.min < self.max
    }
}

pub fn overlaps_any(span: &LabelSpan, spans: &[LabelSpan]) -> bool {
    spans.iter().any(|s| span.overlaps(s))
}

/// Canvas bounds available to labels and the minimum gap between two labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    pub min_y: f32,
    pub max_y: f32,
    pub gap: f32,
}

impl LabelLayout {
    /// Baseline positions at which a label with `extents` stays inside the
    /// bounds, or `None` when the canvas cannot hold it at all.
    pub fn band(&self, extents: TextExtents) -> Option<(f32, f32)> {
        let lo = self.min_y + extents.ascent() + self.gap;
        let hi = self.max_y - extents.descent - self.gap;
        (lo <= hi).then_some((lo, hi))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest<C> {
    pub value: f64,
    pub text: String,
    pub color: C,
    pub extents: TextExtents,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel<C> {
    pub value: f64,
    pub text: String,
    pub color: C,
    pub y: f32,
    pub span: LabelSpan,
}

/// Candidate baselines in trial order: `desired`, then one label-height-plus-gap
/// further up, then down, for `k = 1..=MAX_STEPS`.
pub fn candidates(desired: f32, extents: TextExtents, gap: f32) -> impl Iterator<Item = f32> {
    let step = extents.height + gap;
    std::iter::once(desired).chain((1..=MAX_STEPS).flat_map(move |k| {
        let offset = k as f32 * step;
        [desired - offset, desired + offset]
    }))
}

/// Baseline for one label. Takes the first candidate inside the legal band
/// whose span is clear of every `occupied` span; otherwise clamps `desired`
/// into the band. An inverted band returns `desired` untouched.
pub fn place_label(desired: f32, extents: TextExtents, layout: &LabelLayout, occupied: &[LabelSpan]) -> f32 {
    let Some((lo, hi)) = layout.band(extents) else {
        warn!(desired, "canvas too small for label, leaving at desired position");
        return desired;
    };

    let pad = layout.gap / 2.0;
    let free = candidates(desired, extents, layout.gap)
        .filter(|y| (lo..=hi).contains(y))
        .find(|&y| !overlaps_any(&LabelSpan::around(y, extents, pad), occupied));
    if let Some(y) = free {
        return y;
    }

    warn!(desired, lo, hi, "no free slot for label, clamping");
    desired.clamp(lo, hi)
}

/// Place every request, lowest value first (ties keep input order). Each
/// accepted span joins the occupied set before the next label is placed,
/// so later labels avoid both `reserved` and all earlier placements.
///
/// `to_px` maps a value to its desired baseline. The result is in placement
/// order.
pub fn place_labels<C, F>(
    requests: &[PlacementRequest<C>],
    reserved: &[LabelSpan],
    layout: &LabelLayout,
    to_px: F,
) -> Vec<PlacedLabel<C>>
where
    C: Clone,
    F: Fn(f64) -> f32,
{
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.sort_by(|&a, &b| requests[a].value.total_cmp(&requests[b].value));

    let pad = layout.gap / 2.0;
    let (placed, _occupied) = order.into_iter().fold(
        (Vec::with_capacity(requests.len()), reserved.to_vec()),
        |(mut placed, mut occupied), i| {
            let req = &requests[i];
            let y = place_label(to_px(req.value), req.extents, layout, &occupied);
            let span = LabelSpan::around(y, req.extents, pad);
            occupied.push(span);
            placed.push(PlacedLabel {
                value: req.value,
                text: req.text.clone(),
                color: req.color.clone(),
                y,
                span,
            });
            (placed, occupied)
        },
    );
    placed
}
