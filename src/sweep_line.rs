// SPDX-License-Identifier: AGPL-3.0-or-later

//! Sweep status: the segments currently crossing the sweep line, ordered
//! bottom to top.

use std::cmp::Ordering;

use itertools::Itertools;
use num_traits::Float;

use crate::compare_segments::compare_events_by_segments;
use crate::sweep_event::{EventArena, EventId};

/// The sweep status.
///
/// A plain vector kept ordered by [`compare_events_by_segments`]. Insertion
/// returns the position so callers can read the neighbours off by index; the
/// flag rules need both the direct and the second predecessor.
#[derive(Debug)]
pub struct SweepLine {
    events: Vec<EventId>,
}

impl SweepLine {
    /// Create an empty status.
    pub fn new() -> Self {
        SweepLine { events: Vec::new() }
    }

    /// Number of segments on the sweep line.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether the status is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Insert a left event, keeping the vertical order. Returns the position
    /// at which the event landed.
    pub fn insert<T: Float>(&mut self, arena: &EventArena<T>, event: EventId) -> usize {
        let mut i = self.events.len();
        while i > 0 && compare_events_by_segments(arena, event, self.events[i - 1]) == Ordering::Less
        {
            i -= 1;
        }
        self.events.insert(i, event);
        i
    }

    /// Event at `position`. Panics when out of range; positions come from
    /// [`insert`](SweepLine::insert) and [`find`](SweepLine::find) only.
    pub fn get(&self, position: usize) -> EventId {
        self.events[position]
    }

    /// Position of `event`, by identity.
    pub fn find(&self, event: EventId) -> Option<usize> {
        self.events
            .iter()
            .find_position(|&&e| e == event)
            .map(|(i, _)| i)
    }

    /// Remove and return the event at `position`.
    pub fn remove_at(&mut self, position: usize) -> EventId {
        self.events.remove(position)
    }
}

impl Default for SweepLine {
    fn default() -> Self {
        SweepLine::new()
    }
}
