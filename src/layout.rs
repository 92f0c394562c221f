//! Panel partitioning and overlap layout
//!
//! Segments sharing a `chart` value form one panel. Within a panel,
//! segments that overlap horizontally and sit close in level are
//! displaced vertically so they stay visually distinguishable.
//!
//! # The displacement heuristic
//!
//! Offsets are assigned greedily, one segment at a time in ascending
//! `start` order, and each segment only avoids the offsets its
//! overlapping neighbors hold *at that moment*. Neighbors later in the
//! sort order have not been assigned yet and are read as offset zero.
//! This is intentional: it keeps the pass linear and deterministic, at
//! the cost that a segment can still collide with one assigned after it
//! for pathological overlap graphs. It is a heuristic, not a packing
//! solver, and the stale-read behavior is part of the contract.

use crate::types::Segment;
use std::cmp::Ordering;

/// Segments closer in level than this compete for vertical space
pub const LEVEL_PROXIMITY: f64 = 0.5;

/// Vertical distance between displaced segments
pub const OFFSET_STEP: f64 = 0.3;

/// Whether two segments overlap in their horizontal extent
///
/// Touching endpoints do not count as overlap.
pub fn overlaps(a: &Segment, b: &Segment) -> bool {
    !(a.stop <= b.start || a.start >= b.stop)
}

/// Sort a panel's segments by ascending start, keeping input order on ties
pub fn sort_by_start(segments: &mut [Segment]) {
    segments.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));
}

/// Group segments into panels in first-appearance order of `chart`
pub fn partition_by_chart(segments: Vec<Segment>) -> Vec<(String, Vec<Segment>)> {
    let mut panels: Vec<(String, Vec<Segment>)> = Vec::new();
    for segment in segments {
        match panels.iter_mut().find(|(chart, _)| *chart == segment.chart) {
            Some((_, rows)) => rows.push(segment),
            None => panels.push((segment.chart.clone(), vec![segment])),
        }
    }
    panels
}

/// Compute a vertical offset per segment for one start-sorted panel
///
/// A segment with no conflicting neighbor keeps offset zero. Otherwise
/// it lands one [`OFFSET_STEP`] beyond the largest offset among its
/// conflicting neighbors: above for non-negative levels, below for
/// negative ones.
pub fn compute_offsets(segments: &[Segment]) -> Vec<f64> {
    let mut offsets = vec![0.0; segments.len()];
    for i in 0..segments.len() {
        offsets[i] = displaced_offset(segments, &offsets, i);
        if offsets[i] != 0.0 {
            tracing::trace!(
                "Segment '{}' ({}..{}) displaced by {}",
                segments[i].legend,
                segments[i].start,
                segments[i].stop,
                offsets[i]
            );
        }
    }
    offsets
}

/// Offset for segment `i` given the offsets assigned so far
///
/// Scans every other segment in the panel, including ones that have not
/// been assigned yet; those still read as zero.
fn displaced_offset(segments: &[Segment], offsets: &[f64], i: usize) -> f64 {
    let current = &segments[i];
    let mut neighbor_offsets: Vec<f64> = Vec::new();

    for (j, other) in segments.iter().enumerate() {
        if j == i {
            continue;
        }
        if overlaps(current, other) && (current.level - other.level).abs() < LEVEL_PROXIMITY {
            neighbor_offsets.push(offsets[j]);
        }
    }

    if neighbor_offsets.is_empty() {
        return 0.0;
    }

    let max_offset = neighbor_offsets
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if current.level >= 0.0 {
        max_offset + OFFSET_STEP
    } else {
        max_offset - OFFSET_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(legend: &str, start: f64, stop: f64, level: f64) -> Segment {
        Segment::new("panel", legend, start, stop, level)
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = seg("a", 1.0, 4.0, 0.0);
        let b = seg("b", 4.0, 6.0, 0.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_partial_overlap_detected() {
        let a = seg("a", 1.0, 4.0, 0.0);
        let b = seg("b", 3.0, 6.0, 0.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = seg("outer", 1.0, 10.0, 0.0);
        let inner = seg("inner", 3.0, 5.0, 0.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_disjoint_segments_keep_zero_offsets() {
        let segments = vec![seg("a", 1.0, 2.0, 1.0), seg("b", 3.0, 4.0, 1.0)];
        assert_eq!(compute_offsets(&segments), vec![0.0, 0.0]);
    }

    #[test]
    fn test_distant_levels_keep_zero_offsets() {
        // Full horizontal overlap, but levels 0.5 apart are not "close".
        let segments = vec![seg("a", 1.0, 5.0, 1.0), seg("b", 2.0, 4.0, 1.5)];
        assert_eq!(compute_offsets(&segments), vec![0.0, 0.0]);
    }

    #[test]
    fn test_mutually_overlapping_trio_stacks_upward() {
        let segments = vec![
            seg("A", 1.0, 5.0, 2.0),
            seg("B", 2.0, 4.0, 2.0),
            seg("C", 3.0, 6.0, 2.0),
        ];
        let offsets = compute_offsets(&segments);
        // Every segment has a conflicting neighbor, so even the first is
        // displaced one step; the rest stack strictly above it.
        assert_eq!(offsets.len(), 3);
        assert!((offsets[0] - 0.3).abs() < 1e-9);
        assert!((offsets[1] - 0.6).abs() < 1e-9);
        assert!((offsets[2] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_negative_levels_stack_downward() {
        let segments = vec![seg("a", 1.0, 5.0, -3.0), seg("b", 2.0, 4.0, -3.0)];
        let offsets = compute_offsets(&segments);
        assert!((offsets[0] + 0.3).abs() < 1e-9);
        assert!((offsets[1] + 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_first_segment_reads_stale_zero_from_later_neighbor() {
        // A scan over earlier rows only would leave the first segment at
        // zero; reading the later neighbor's stale zero displaces it too.
        let segments = vec![seg("a", 1.0, 5.0, 2.0), seg("b", 1.5, 4.0, 2.0)];
        let offsets = compute_offsets(&segments);
        assert!((offsets[0] - 0.3).abs() < 1e-9);
        assert!((offsets[1] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let mut segments = vec![
            seg("second", 2.0, 3.0, 0.0),
            seg("tie_a", 1.0, 3.0, 0.0),
            seg("tie_b", 1.0, 2.0, 0.0),
        ];
        sort_by_start(&mut segments);
        let order: Vec<&str> = segments.iter().map(|s| s.legend.as_str()).collect();
        assert_eq!(order, vec!["tie_a", "tie_b", "second"]);
    }

    #[test]
    fn test_partition_preserves_first_appearance_order() {
        let segments = vec![
            Segment::new("Voltage", "v1", 0.0, 1.0, 0.0),
            Segment::new("Current", "i1", 0.0, 1.0, 0.0),
            Segment::new("Voltage", "v2", 1.0, 2.0, 0.0),
            Segment::new("Power", "p1", 0.0, 1.0, 0.0),
        ];
        let panels = partition_by_chart(segments);
        let charts: Vec<&str> = panels.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(charts, vec!["Voltage", "Current", "Power"]);
        assert_eq!(panels[0].1.len(), 2);
        assert_eq!(panels[1].1.len(), 1);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    fn arb_panel(
        level_range: std::ops::Range<f64>,
        max_len: usize,
    ) -> impl Strategy<Value = Vec<Segment>> {
        prop::collection::vec((0.0f64..100.0, 0.1f64..20.0, level_range), 1..max_len).prop_map(
            |rows| {
                let mut segments: Vec<Segment> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (start, width, level))| {
                        Segment::new("panel", format!("s{}", i), start, start + width, level)
                    })
                    .collect();
                sort_by_start(&mut segments);
                segments
            },
        )
    }

    proptest! {
        #[test]
        fn test_offsets_are_step_multiples(segments in arb_panel(-10.0..10.0, 20)) {
            let offsets = compute_offsets(&segments);
            for offset in offsets {
                let steps = offset / OFFSET_STEP;
                prop_assert!((steps - steps.round()).abs() < 1e-6);
            }
        }

        #[test]
        fn test_nonnegative_panel_displaces_upward(segments in arb_panel(0.0..10.0, 20)) {
            for offset in compute_offsets(&segments) {
                prop_assert!(offset >= 0.0);
            }
        }

        #[test]
        fn test_negative_panel_displaces_downward(segments in arb_panel(-10.0..-0.01, 20)) {
            for offset in compute_offsets(&segments) {
                prop_assert!(offset <= 0.0);
            }
        }

        #[test]
        fn test_isolated_segments_never_move(segments in arb_panel(-10.0..10.0, 20)) {
            let offsets = compute_offsets(&segments);
            for (i, segment) in segments.iter().enumerate() {
                let has_conflict = segments.iter().enumerate().any(|(j, other)| {
                    j != i
                        && overlaps(segment, other)
                        && (segment.level - other.level).abs() < LEVEL_PROXIMITY
                });
                if !has_conflict {
                    prop_assert_eq!(offsets[i], 0.0);
                }
            }
        }
    }
}
