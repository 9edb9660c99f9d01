// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep driver computing boolean operations between two polygons.

use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::connector::Connector;
use crate::event_queue::EventQueue;
use crate::polygon::Polygon;
use crate::possible_intersection::possible_intersection;
use crate::segment::Segment;
use crate::sweep_event::{EdgeType, EventArena, EventId, PolygonType};
use crate::sweep_line::SweepLine;
use crate::{Operation, OperationError};

/// Compute a boolean operation between two polygons.
///
/// Both polygons may consist of several contours; holes are contours like any
/// other, interpreted with the even-odd rule. Contours assembled by the sweep
/// are explicitly closed (the first point is repeated at the end); trivial
/// cases return operand contours unchanged.
///
/// # Example
/// ```
/// use polygon_booleanop::{boolean_op, Operation, Polygon};
///
/// let subject: Polygon<f64> = Polygon::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
/// let clipping = Polygon::from(vec![(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)]);
///
/// let result = boolean_op(&subject, &clipping, Operation::Intersection).unwrap();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.contour(0).signed_area().abs() / 2.0, 4.0);
/// ```
pub fn boolean_op<T: Float + Debug>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
    operation: Operation,
) -> Result<Polygon<T>, OperationError> {
    let (subject_bbox, clipping_bbox) = match (subject.bounding_box(), clipping.bounding_box()) {
        (Some(s), Some(c)) => (s, c),
        (s, _) => {
            // An operand without any vertices.
            debug!("trivial case: empty operand");
            return Ok(match operation {
                Operation::Difference => subject.clone(),
                Operation::Union | Operation::Xor => {
                    if s.is_none() {
                        clipping.clone()
                    } else {
                        subject.clone()
                    }
                }
                Operation::Intersection => Polygon::new(),
            });
        }
    };

    if subject_bbox.is_disjoint(&clipping_bbox) {
        debug!("trivial case: disjoint bounding boxes");
        return Ok(match operation {
            Operation::Difference => subject.clone(),
            Operation::Union | Operation::Xor => {
                let mut result = subject.clone();
                for contour in clipping.contours() {
                    result.push(contour.clone());
                }
                result
            }
            Operation::Intersection => Polygon::new(),
        });
    }

    let mut arena = EventArena::new();
    let mut queue = EventQueue::new();

    for contour in subject.contours() {
        for i in 0..contour.len() {
            process_segment(&mut arena, &mut queue, contour.segment(i), PolygonType::Subject);
        }
    }
    for contour in clipping.contours() {
        for i in 0..contour.len() {
            process_segment(
                &mut arena,
                &mut queue,
                contour.segment(i),
                PolygonType::Clipping,
            );
        }
    }

    let mut sweep_line = SweepLine::new();
    let mut connector = Connector::new();
    let min_max_x = subject_bbox.max.x.min(clipping_bbox.max.x);

    while let Some(event) = queue.dequeue(&arena) {
        trace!(
            "process event at {:?} (left: {}, {:?})",
            arena[event].point,
            arena[event].is_left,
            arena[event].polygon_type
        );

        // Past the right edge of one operand nothing can be added to an
        // intersection or difference anymore.
        let x = arena[event].point.x;
        if (operation == Operation::Intersection && x > min_max_x)
            || (operation == Operation::Difference && x > subject_bbox.max.x)
        {
            debug!("early termination at x = {:?}", x);
            return Ok(connector.to_polygon());
        }

        if arena[event].is_left {
            let position = sweep_line.insert(&arena, event);
            let prev = if position > 0 {
                Some(sweep_line.get(position - 1))
            } else {
                None
            };
            let next = if position + 1 < sweep_line.len() {
                Some(sweep_line.get(position + 1))
            } else {
                None
            };

            compute_flags(&mut arena, event, prev, position, &sweep_line);

            if let Some(next) = next {
                possible_intersection(&mut arena, &mut queue, event, next)?;
            }
            if let Some(prev) = prev {
                possible_intersection(&mut arena, &mut queue, prev, event)?;
            }
        } else {
            let other = arena[event].other;
            let other_pos = sweep_line.find(other);

            let (prev, next) = match other_pos {
                Some(pos) => (
                    if pos > 0 {
                        Some(sweep_line.get(pos - 1))
                    } else {
                        None
                    },
                    if pos + 1 < sweep_line.len() {
                        Some(sweep_line.get(pos + 1))
                    } else {
                        None
                    },
                ),
                None => (None, None),
            };

            if contributes_to_result(operation, &arena, event) {
                connector.add(arena.segment(event));
            }

            if let Some(pos) = other_pos {
                sweep_line.remove_at(pos);
            }

            if let (Some(next), Some(prev)) = (next, prev) {
                possible_intersection(&mut arena, &mut queue, next, prev)?;
            }
        }
    }

    Ok(connector.to_polygon())
}

/// Compute the intersection `subject AND clipping`.
pub fn intersection<T: Float + Debug>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
) -> Result<Polygon<T>, OperationError> {
    boolean_op(subject, clipping, Operation::Intersection)
}

/// Compute the union `subject OR clipping`.
pub fn union<T: Float + Debug>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
) -> Result<Polygon<T>, OperationError> {
    boolean_op(subject, clipping, Operation::Union)
}

/// Compute the difference `subject AND NOT clipping`.
pub fn difference<T: Float + Debug>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
) -> Result<Polygon<T>, OperationError> {
    boolean_op(subject, clipping, Operation::Difference)
}

/// Compute the symmetric difference `subject XOR clipping`.
pub fn xor<T: Float + Debug>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
) -> Result<Polygon<T>, OperationError> {
    boolean_op(subject, clipping, Operation::Xor)
}

/// Turn one contour edge into its two endpoint events.
fn process_segment<T: Float>(
    arena: &mut EventArena<T>,
    queue: &mut EventQueue,
    segment: Segment<T>,
    polygon_type: PolygonType,
) {
    // Zero-length edges are dropped.
    if segment.begin == segment.end {
        return;
    }
    let (e1, e2) = arena.alloc_pair(segment.begin, segment.end, polygon_type);
    queue.enqueue(arena, e1);
    queue.enqueue(arena, e2);
}

/// Set the `inside` and `in_out` flags of a freshly inserted left event from
/// its predecessor in the sweep status.
fn compute_flags<T: Float>(
    arena: &mut EventArena<T>,
    event: EventId,
    prev: Option<EventId>,
    position: usize,
    sweep_line: &SweepLine,
) {
    let prev = match prev {
        Some(prev) => prev,
        None => {
            arena[event].inside = false;
            arena[event].in_out = false;
            return;
        }
    };

    let polygon_type = arena[event].polygon_type;
    let prev_polygon_type = arena[prev].polygon_type;

    if arena[prev].edge_type != EdgeType::Normal {
        // The predecessor is one copy of an overlapped edge pair; its flags
        // alone do not describe the transition, look one edge further down.
        if position < 2 {
            arena[event].inside = prev_polygon_type != polygon_type;
            arena[event].in_out = prev_polygon_type == polygon_type;
        } else {
            let prev2 = sweep_line.get(position - 2);
            if prev_polygon_type == polygon_type {
                arena[event].in_out = !arena[prev].in_out;
                arena[event].inside = !arena[prev2].in_out;
            } else {
                arena[event].in_out = !arena[prev2].in_out;
                arena[event].inside = !arena[prev].in_out;
            }
        }
    } else if polygon_type == prev_polygon_type {
        arena[event].inside = arena[prev].inside;
        arena[event].in_out = !arena[prev].in_out;
    } else {
        arena[event].inside = !arena[prev].in_out;
        arena[event].in_out = arena[prev].inside;
    }
}

/// Decide whether a completed edge belongs to the result boundary.
///
/// Evaluated on the closing event; the `inside` flag lives on its sibling.
/// This is a pure function of the operation, the edge classification, the
/// operand and the sibling's flag.
fn contributes_to_result<T: Float>(
    operation: Operation,
    arena: &EventArena<T>,
    event: EventId,
) -> bool {
    debug_assert!(!arena[event].is_left);
    let inside = arena[arena[event].other].inside;

    match arena[event].edge_type {
        EdgeType::Normal => match operation {
            Operation::Intersection => inside,
            Operation::Union => !inside,
            Operation::Difference => match arena[event].polygon_type {
                PolygonType::Subject => !inside,
                PolygonType::Clipping => inside,
            },
            Operation::Xor => true,
        },
        EdgeType::SameTransition => {
            operation == Operation::Intersection || operation == Operation::Union
        }
        EdgeType::DifferentTransition => operation == Operation::Difference,
        EdgeType::NonContributing => false,
    }
}
