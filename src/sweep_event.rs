// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sweep events and the order in which they leave the event queue.

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::point::{signed_area, Point};
use crate::segment::Segment;

/// Operand of the boolean operation an edge belongs to.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PolygonType {
    /// First operand.
    Subject,
    /// Second operand.
    Clipping,
}

/// Classification of an edge with respect to coincident edges of the other
/// polygon.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum EdgeType {
    /// Ordinary edge; contribution is decided by the `inside` flag.
    Normal,
    /// One copy of a pair of coincident cross-polygon edges. Never part of
    /// the result.
    NonContributing,
    /// Coincident edges whose polygons lie on the same side.
    SameTransition,
    /// Coincident edges whose polygons lie on opposite sides.
    DifferentTransition,
}

/// Stable handle of a sweep event inside an [`EventArena`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EventId(usize);

/// One endpoint of a segment travelling through the sweep.
#[derive(Debug, Clone)]
pub struct SweepEvent<T> {
    /// Point associated with the event.
    pub point: Point<T>,
    /// Handle of the event at the other endpoint of the segment.
    pub other: EventId,
    /// Is `point` the left endpoint of the segment?
    pub is_left: bool,
    /// Operand the edge belongs to.
    pub polygon_type: PolygonType,
    /// Does the segment lie inside the other polygon?
    pub inside: bool,
    /// Does an upward ray cast just right of the sweep position leave the
    /// event's own polygon at this edge?
    pub in_out: bool,
    /// Overlap classification.
    pub edge_type: EdgeType,
    /// Creation order within one operation run. Identity and deterministic
    /// tie break.
    pub id: EventId,
}

/// Append-only storage for the events of one operation run.
///
/// Events are addressed by [`EventId`]; handles stay valid for the whole run,
/// so sibling links never dangle. Siblings are rebound in place when a
/// segment is subdivided.
#[derive(Debug)]
pub struct EventArena<T> {
    events: Vec<SweepEvent<T>>,
}

impl<T: Float> EventArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        EventArena { events: Vec::new() }
    }

    /// Number of allocated events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether no event was allocated yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Allocate a single event with an explicit sibling handle.
    pub fn alloc(
        &mut self,
        point: Point<T>,
        is_left: bool,
        polygon_type: PolygonType,
        other: EventId,
        edge_type: EdgeType,
    ) -> EventId {
        let id = EventId(self.events.len());
        self.events.push(SweepEvent {
            point,
            other,
            is_left,
            polygon_type,
            inside: false,
            in_out: false,
            edge_type,
            id,
        });
        id
    }

    /// Allocate both endpoint events of a segment, wired as siblings. The
    /// lexicographically smaller endpoint (by x, then y) becomes the left
    /// event.
    pub fn alloc_pair(
        &mut self,
        begin: Point<T>,
        end: Point<T>,
        polygon_type: PolygonType,
    ) -> (EventId, EventId) {
        debug_assert!(begin != end);

        let id1 = EventId(self.events.len());
        let id2 = EventId(self.events.len() + 1);
        let begin_is_left = begin.x < end.x || (begin.x == end.x && begin.y < end.y);

        self.events.push(SweepEvent {
            point: begin,
            other: id2,
            is_left: begin_is_left,
            polygon_type,
            inside: false,
            in_out: false,
            edge_type: EdgeType::Normal,
            id: id1,
        });
        self.events.push(SweepEvent {
            point: end,
            other: id1,
            is_left: !begin_is_left,
            polygon_type,
            inside: false,
            in_out: false,
            edge_type: EdgeType::Normal,
            id: id2,
        });

        (id1, id2)
    }

    /// Segment of the event, directed from the event's own point to its
    /// sibling's point.
    pub fn segment(&self, event: EventId) -> Segment<T> {
        Segment::new(self[event].point, self[self[event].other].point)
    }

    /// Signed area of the event's segment with `point`, oriented so that a
    /// positive value means the segment runs below the point.
    pub fn below_area(&self, event: EventId, point: Point<T>) -> T {
        let e = &self[event];
        let other = self[e.other].point;
        if e.is_left {
            signed_area(e.point, other, point)
        } else {
            signed_area(other, e.point, point)
        }
    }

    /// Is the event's segment below `point`?
    pub fn below(&self, event: EventId, point: Point<T>) -> bool {
        self.below_area(event, point) > T::zero()
    }

    /// Is the event's segment above `point`?
    pub fn above(&self, event: EventId, point: Point<T>) -> bool {
        !self.below(event, point)
    }
}

impl<T: Float> Default for EventArena<T> {
    fn default() -> Self {
        EventArena::new()
    }
}

impl<T> Index<EventId> for EventArena<T> {
    type Output = SweepEvent<T>;

    fn index(&self, id: EventId) -> &SweepEvent<T> {
        &self.events[id.0]
    }
}

impl<T> IndexMut<EventId> for EventArena<T> {
    fn index_mut(&mut self, id: EventId) -> &mut SweepEvent<T> {
        &mut self.events[id.0]
    }
}

/// Total order in which events leave the queue. `Less` is dequeued first.
///
/// 1. ascending x;
/// 2. equal x: ascending y;
/// 3. identical points: right (closing) events before left (opening) events;
/// 4. identical points, same endpoint kind: the event whose segment runs
///    below the other's sibling point first;
/// 5. collinear through the shared point: ascending creation order.
pub fn compare_events<T: Float>(arena: &EventArena<T>, a: EventId, b: EventId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (ea, eb) = (&arena[a], &arena[b]);

    if ea.point.x < eb.point.x {
        return Ordering::Less;
    }
    if ea.point.x > eb.point.x {
        return Ordering::Greater;
    }

    if ea.point != eb.point {
        return if ea.point.y < eb.point.y {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if ea.is_left != eb.is_left {
        return if ea.is_left {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    let area = arena.below_area(a, arena[eb.other].point);
    if area > T::zero() {
        Ordering::Less
    } else if area < T::zero() {
        Ordering::Greater
    } else {
        ea.id.cmp(&eb.id)
    }
}
