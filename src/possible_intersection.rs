// SPDX-License-Identifier: AGPL-3.0-or-later

//! Treatment of a pair of neighbouring segments on the sweep line:
//! subdivision at crossing points and classification of overlapping edges.

use std::cmp::Ordering;

use num_traits::Float;

use crate::event_queue::EventQueue;
use crate::intersection::{segment_intersection, SegmentIntersection};
use crate::point::Point;
use crate::sweep_event::{compare_events, EdgeType, EventArena, EventId};
use crate::OperationError;

/// Split the segment of `event` at the interior point `point`.
///
/// Creates a closing event for the left half and an opening event for the
/// right half, rebinds the sibling links and enqueues both new events. The
/// halves inherit the edge types of the endpoints they replace.
pub fn divide_segment<T: Float>(
    arena: &mut EventArena<T>,
    queue: &mut EventQueue,
    event: EventId,
    point: Point<T>,
) {
    let old_other = arena[event].other;
    let polygon_type = arena[event].polygon_type;

    let right = arena.alloc(point, false, polygon_type, event, arena[event].edge_type);
    let left = arena.alloc(point, true, polygon_type, old_other, arena[old_other].edge_type);

    // Rounding can put the split point past the original right endpoint;
    // restore the processing order by swapping the endpoint roles.
    if compare_events(arena, left, old_other) == Ordering::Greater {
        arena[old_other].is_left = true;
        arena[left].is_left = false;
    }

    arena[old_other].other = left;
    arena[event].other = right;

    queue.enqueue(arena, left);
    queue.enqueue(arena, right);
}

/// Handle a possible intersection between the segments of two events that
/// became neighbours on the sweep line.
///
/// Crossings subdivide the segments. Overlapping collinear edges from
/// different polygons are classified so exactly one copy can contribute to
/// the result; overlapping edges within one polygon are not supported.
pub fn possible_intersection<T: Float>(
    arena: &mut EventArena<T>,
    queue: &mut EventQueue,
    event1: EventId,
    event2: EventId,
) -> Result<(), OperationError> {
    let seg1 = arena.segment(event1);
    let seg2 = arena.segment(event2);

    let p1 = arena[event1].point;
    let p1_other = arena[arena[event1].other].point;
    let p2 = arena[event2].point;
    let p2_other = arena[arena[event2].other].point;

    match segment_intersection(&seg1, &seg2) {
        SegmentIntersection::None => Ok(()),
        SegmentIntersection::Point(ip) => {
            // A shared endpoint is already represented by the events.
            if p1 == p2 || p1_other == p2_other {
                return Ok(());
            }

            if p1 != ip && p1_other != ip {
                divide_segment(arena, queue, event1, ip);
            }
            if p2 != ip && p2_other != ip {
                divide_segment(arena, queue, event2, ip);
            }
            Ok(())
        }
        SegmentIntersection::Overlap(_, _) => {
            if arena[event1].polygon_type == arena[event2].polygon_type {
                return Err(OperationError::UnsupportedOverlappingEdges);
            }

            let transition = if arena[event1].in_out == arena[event2].in_out {
                EdgeType::SameTransition
            } else {
                EdgeType::DifferentTransition
            };

            let other1 = arena[event1].other;
            let other2 = arena[event2].other;

            let left_coincide = p1 == p2;
            let right_coincide = p1_other == p2_other;

            // Each endpoint pair sorted by queue order.
            let (left_first, left_second) =
                if compare_events(arena, event1, event2) == Ordering::Greater {
                    (event2, event1)
                } else {
                    (event1, event2)
                };
            let (right_first, right_second) =
                if compare_events(arena, other1, other2) == Ordering::Greater {
                    (other2, other1)
                } else {
                    (other1, other2)
                };

            if left_coincide && right_coincide {
                // The segments fully coincide; only the second copy may
                // contribute.
                arena[event1].edge_type = EdgeType::NonContributing;
                arena[other1].edge_type = EdgeType::NonContributing;
                arena[event2].edge_type = transition;
                arena[other2].edge_type = transition;
            } else if left_coincide {
                // Shared left endpoint; the shorter segment is fully covered.
                let short_left = arena[right_first].other;
                arena[right_first].edge_type = EdgeType::NonContributing;
                arena[short_left].edge_type = EdgeType::NonContributing;

                let long_left = arena[right_second].other;
                arena[long_left].edge_type = transition;
                let split = arena[right_first].point;
                divide_segment(arena, queue, long_left, split);
            } else if right_coincide {
                // Shared right endpoint; the later-starting segment is fully
                // covered.
                let short_right = arena[left_second].other;
                arena[left_second].edge_type = EdgeType::NonContributing;
                arena[short_right].edge_type = EdgeType::NonContributing;

                let long_right = arena[left_first].other;
                arena[long_right].edge_type = transition;
                let split = arena[left_second].point;
                divide_segment(arena, queue, left_first, split);
            } else if left_first != arena[right_second].other {
                // Partial overlap; each segment sticks out on one side.
                arena[left_second].edge_type = EdgeType::NonContributing;
                arena[right_first].edge_type = transition;

                let split1 = arena[left_second].point;
                divide_segment(arena, queue, left_first, split1);
                let split2 = arena[right_first].point;
                divide_segment(arena, queue, left_second, split2);
            } else {
                // One segment contains the other.
                let inner_right = arena[left_second].other;
                arena[left_second].edge_type = EdgeType::NonContributing;
                arena[inner_right].edge_type = EdgeType::NonContributing;

                let split1 = arena[left_second].point;
                divide_segment(arena, queue, left_first, split1);

                // The first split rebound the outer segment; its tail now
                // opens at the inner left point.
                let tail = arena[right_second].other;
                arena[tail].edge_type = transition;
                let split2 = arena[right_first].point;
                divide_segment(arena, queue, tail, split2);
            }
            Ok(())
        }
    }
}
