// File: crates/chart-core/tests/placement.rs
// Purpose: Validate collision-avoiding label placement: non-overlap, clamping, termination, determinism.

use chart_core::placement::{candidates, place_label, MAX_STEPS};
use chart_core::{place_labels, LabelLayout, LabelSpan, PlacementRequest, TextExtents};

const EXT: TextExtents = TextExtents { width: 60.0, height: 14.0, descent: 3.0 };

fn layout(min_y: f32, max_y: f32) -> LabelLayout {
    LabelLayout { min_y, max_y, gap: 2.0 }
}

fn req(value: f64, text: &str) -> PlacementRequest<u8> {
    PlacementRequest { value, text: text.to_string(), color: 0, extents: EXT }
}

/// Value 0 at the bottom (y = 400), 100 at the top (y = 0).
fn to_px(v: f64) -> f32 {
    400.0 - (v as f32) * 4.0
}

#[test]
fn candidate_order_alternates_from_desired() {
    let ys: Vec<f32> = candidates(100.0, EXT, 2.0).collect();
    assert_eq!(ys.len(), 1 + 2 * MAX_STEPS);
    assert_eq!(&ys[..5], &[100.0, 84.0, 116.0, 68.0, 132.0]);
}

#[test]
fn free_label_keeps_desired_position() {
    let placed = place_labels(&[req(50.0, "A")], &[], &layout(0.0, 400.0), to_px);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].y, 200.0);
    assert_eq!(placed[0].span, LabelSpan { min: 188.0, max: 204.0 });
}

#[test]
fn label_moves_up_off_reserved_tick() {
    let reserved = [LabelSpan::around(200.0, EXT, 1.0)];
    let y = place_label(200.0, EXT, &layout(0.0, 400.0), &reserved);
    assert_eq!(y, 184.0);
    assert!(!LabelSpan::around(y, EXT, 1.0).overlaps(&reserved[0]));
}

#[test]
fn dense_labels_do_not_overlap() {
    let reserved: Vec<LabelSpan> = [0.0, 10.0, 20.0, 30.0, 40.0]
        .iter()
        .map(|&v| LabelSpan::around(to_px(v), EXT, 1.0))
        .collect();
    let requests = vec![req(10.4, "A"), req(10.0, "B"), req(12.5, "C"), req(33.0, "D"), req(35.0, "E")];
    let lay = layout(0.0, 400.0);
    let placed = place_labels(&requests, &reserved, &lay, to_px);
    assert_eq!(placed.len(), requests.len());

    let (lo, hi) = lay.band(EXT).expect("band");
    for (i, a) in placed.iter().enumerate() {
        assert!(a.y >= lo && a.y <= hi, "{} out of band at {}", a.text, a.y);
        for r in &reserved {
            assert!(!a.span.overlaps(r), "{} overlaps a tick label", a.text);
        }
        for b in &placed[i + 1..] {
            assert!(!a.span.overlaps(&b.span), "{} overlaps {}", a.text, b.text);
        }
    }
}

#[test]
fn placement_order_is_by_value_with_stable_ties() {
    let requests = vec![req(5.0, "high"), req(1.0, "first"), req(1.0, "second")];
    let placed = place_labels(&requests, &[], &layout(0.0, 400.0), to_px);
    let texts: Vec<&str> = placed.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "high"]);
    // y = 396 sits below the band, so each tie steps up past the previous one.
    assert_eq!(placed[0].y, 380.0);
    assert_eq!(placed[1].y, 364.0);
    assert_eq!(placed[2].y, 348.0);
}

#[test]
fn crowded_canvas_still_places_every_label() {
    let requests: Vec<_> = (0..8).map(|i| req(i as f64, "X")).collect();
    let lay = layout(0.0, 30.0);
    let placed = place_labels(&requests, &[], &lay, |v| 10.0 + v as f32);
    assert_eq!(placed.len(), 8);
    let (lo, hi) = lay.band(EXT).expect("band");
    assert_eq!((lo, hi), (13.0, 25.0));
    assert!(placed.iter().all(|p| p.y >= lo && p.y <= hi));
}

#[test]
fn blocked_candidates_clamp_into_band() {
    let wall = [LabelSpan { min: -1000.0, max: 1000.0 }];
    let lay = layout(0.0, 400.0);
    let (lo, hi) = lay.band(EXT).expect("band");
    assert_eq!((lo, hi), (13.0, 395.0));
    assert_eq!(place_label(500.0, EXT, &lay, &wall), hi);
    assert_eq!(place_label(-50.0, EXT, &lay, &wall), lo);
    assert_eq!(place_label(100.0, EXT, &lay, &wall), 100.0);
}

#[test]
fn inverted_band_returns_desired() {
    let lay = layout(0.0, 10.0);
    assert!(lay.band(EXT).is_none());
    let placed = place_labels(&[req(1.0, "A"), req(2.0, "B")], &[], &lay, |v| v as f32 * 3.0);
    assert_eq!(placed[0].y, 3.0);
    assert_eq!(placed[1].y, 6.0);
}

#[test]
fn placement_is_deterministic() {
    let reserved: Vec<LabelSpan> = [0.0, 25.0, 50.0].iter().map(|&v| LabelSpan::around(to_px(v), EXT, 1.0)).collect();
    let requests = vec![req(24.9, "A"), req(25.3, "B"), req(0.2, "C"), req(49.0, "D")];
    let lay = layout(0.0, 400.0);
    let a = place_labels(&requests, &reserved, &lay, to_px);
    let b = place_labels(&requests, &reserved, &lay, to_px);
    let bits = |v: &[chart_core::PlacedLabel<u8>]| v.iter().map(|p| p.y.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}
