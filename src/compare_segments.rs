// SPDX-License-Identifier: AGPL-3.0-or-later

//! Vertical order of segments crossing the sweep line.

use std::cmp::Ordering;

use num_traits::Float;

use crate::point::signed_area;
use crate::sweep_event::{compare_events, EventArena, EventId};

/// Compare two left events by the vertical order of their segments on the
/// sweep line. `Less` means the segment of `a` runs below the segment of `b`.
///
/// For non-collinear segments the event entering the sweep first decides,
/// testing the later event's point against its own segment. Collinear
/// segments through distinct points fall back to the queue order (the later
/// event sorts below); collinear segments sharing their left point are
/// ordered by creation, newer above.
pub fn compare_events_by_segments<T: Float>(
    arena: &EventArena<T>,
    a: EventId,
    b: EventId,
) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (pa, pa_other) = (arena[a].point, arena[arena[a].other].point);
    let (pb, pb_other) = (arena[b].point, arena[arena[b].other].point);

    if signed_area(pa, pa_other, pb) != T::zero()
        || signed_area(pa, pa_other, pb_other) != T::zero()
    {
        // Segments are not collinear.
        if pa == pb {
            return if arena.below(a, pb_other) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if compare_events(arena, a, b) == Ordering::Greater {
            // `b` entered the sweep first and decides.
            return if arena.above(b, pa) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        return if arena.below(a, pb) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Collinear segments.
    if pa == pb {
        return arena[a].id.cmp(&arena[b].id);
    }

    match compare_events(arena, a, b) {
        Ordering::Less => Ordering::Greater,
        Ordering::Greater => Ordering::Less,
        Ordering::Equal => Ordering::Equal,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Point;
    use crate::sweep_event::PolygonType;

    fn left_event(arena: &mut EventArena<f64>, begin: (f64, f64), end: (f64, f64)) -> EventId {
        let (a, b) = arena.alloc_pair(Point::from(begin), Point::from(end), PolygonType::Subject);
        if arena[a].is_left {
            a
        } else {
            b
        }
    }

    #[test]
    fn test_disjoint_heights() {
        let mut arena = EventArena::new();
        let lower = left_event(&mut arena, (0.0, 0.0), (2.0, 0.0));
        let upper = left_event(&mut arena, (0.5, 1.0), (2.5, 1.0));

        assert_eq!(
            compare_events_by_segments(&arena, lower, upper),
            Ordering::Less
        );
        assert_eq!(
            compare_events_by_segments(&arena, upper, lower),
            Ordering::Greater
        );
        assert_eq!(
            compare_events_by_segments(&arena, lower, lower),
            Ordering::Equal
        );
    }

    #[test]
    fn test_shared_left_point() {
        let mut arena = EventArena::new();
        let steep = left_event(&mut arena, (0.0, 0.0), (1.0, 2.0));
        let shallow = left_event(&mut arena, (0.0, 0.0), (2.0, 1.0));

        assert_eq!(
            compare_events_by_segments(&arena, shallow, steep),
            Ordering::Less
        );
        assert_eq!(
            compare_events_by_segments(&arena, steep, shallow),
            Ordering::Greater
        );
    }

    #[test]
    fn test_earlier_segment_decides() {
        let mut arena = EventArena::new();
        // The first segment is already in the status when the second starts
        // above it.
        let first = left_event(&mut arena, (0.0, 0.0), (4.0, 0.0));
        let second = left_event(&mut arena, (1.0, 1.0), (3.0, 2.0));

        assert_eq!(
            compare_events_by_segments(&arena, first, second),
            Ordering::Less
        );
        assert_eq!(
            compare_events_by_segments(&arena, second, first),
            Ordering::Greater
        );
    }

    #[test]
    fn test_collinear_segments_fall_back_to_queue_order() {
        let mut arena = EventArena::new();
        let early = left_event(&mut arena, (0.0, 0.0), (2.0, 0.0));
        let late = left_event(&mut arena, (1.0, 0.0), (3.0, 0.0));

        // The later event sorts below.
        assert_eq!(
            compare_events_by_segments(&arena, late, early),
            Ordering::Less
        );
        assert_eq!(
            compare_events_by_segments(&arena, early, late),
            Ordering::Greater
        );
    }

    #[test]
    fn test_collinear_shared_point_ordered_by_creation() {
        let mut arena = EventArena::new();
        let older = left_event(&mut arena, (0.0, 0.0), (2.0, 2.0));
        let newer = left_event(&mut arena, (0.0, 0.0), (2.0, 2.0));

        assert_eq!(
            compare_events_by_segments(&arena, older, newer),
            Ordering::Less
        );
        assert_eq!(
            compare_events_by_segments(&arena, newer, older),
            Ordering::Greater
        );
    }
}
