// File: crates/chart-core/tests/align.rs
// Purpose: Validate base-timeline alignment, forward-fill and leading trim.

use chart_core::align::forward_fill;
use chart_core::{align_series, ChartError, InstrumentId, RawSeries};

const NAN: f64 = f64::NAN;

fn raw(points: &[(i64, f64)]) -> RawSeries {
    points.iter().copied().collect()
}

fn id(s: &str) -> InstrumentId {
    InstrumentId::new(s)
}

#[test]
fn forward_fill_carries_last_known_price() {
    let series = raw(&[(1, 10.0), (2, NAN), (4, 12.0)]);
    let filled = forward_fill(&[1, 2, 3, 4], &series);
    assert_eq!(filled, vec![Some(10.0), Some(10.0), Some(10.0), Some(12.0)]);
}

#[test]
fn forward_fill_is_unknown_before_first_price() {
    let series = raw(&[(3, 5.0)]);
    assert_eq!(forward_fill(&[1, 2, 3, 4], &series), vec![None, None, Some(5.0), Some(5.0)]);
}

#[test]
fn trims_leading_incomplete_region() {
    let inputs = vec![
        (id("A"), raw(&[(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)])),
        (id("B"), raw(&[(1, NAN), (2, NAN), (3, 30.0), (4, NAN)])),
    ];
    let aligned = align_series(&inputs).expect("aligned");
    assert_eq!(aligned.timeline, vec![3, 4]);
    assert_eq!(aligned.prices[0], (id("A"), vec![3.0, 4.0]));
    assert_eq!(aligned.prices[1], (id("B"), vec![30.0, 30.0]));
}

#[test]
fn every_instrument_known_after_trim() {
    let inputs = vec![
        (id("A"), raw(&[(10, 1.0), (20, 1.1), (30, NAN), (40, 1.3), (50, 1.2)])),
        (id("B"), raw(&[(20, NAN), (30, 7.0), (50, 7.5)])),
        // 15 is not on the base timeline and is never sampled.
        (id("C"), raw(&[(15, 2.0), (40, 2.2)])),
    ];
    let aligned = align_series(&inputs).expect("aligned");
    assert_eq!(aligned.timeline, vec![40, 50]);
    for (_, prices) in &aligned.prices {
        assert_eq!(prices.len(), aligned.timeline.len());
        assert!(prices.iter().all(|p| p.is_finite()));
    }
    assert_eq!(aligned.prices[0].1, vec![1.3, 1.2]);
    assert_eq!(aligned.prices[1].1, vec![7.0, 7.5]);
    assert_eq!(aligned.prices[2].1, vec![2.2, 2.2]);
}

#[test]
fn base_timeline_is_first_non_empty_series() {
    let inputs = vec![
        (id("EMPTY"), RawSeries::new()),
        (id("B"), raw(&[(5, 1.0), (6, 1.0)])),
        (id("C"), raw(&[(4, 3.0), (5, 3.0), (6, 3.0), (7, 3.0)])),
    ];
    // EMPTY is never known, so no complete sample exists.
    assert!(matches!(align_series(&inputs), Err(ChartError::InsufficientData)));

    let aligned = align_series(&inputs[1..]).expect("aligned");
    assert_eq!(aligned.timeline, vec![5, 6]);
}

#[test]
fn empty_input_is_insufficient() {
    assert!(matches!(align_series(&[]), Err(ChartError::InsufficientData)));
    let inputs = vec![(id("A"), RawSeries::new())];
    assert!(matches!(align_series(&inputs), Err(ChartError::InsufficientData)));
}

#[test]
fn never_simultaneously_known_is_insufficient() {
    let inputs = vec![
        (id("A"), raw(&[(1, 1.0), (2, 1.0)])),
        (id("B"), raw(&[(1, NAN), (2, NAN), (3, 4.0)])),
    ];
    assert!(matches!(align_series(&inputs), Err(ChartError::InsufficientData)));
}
