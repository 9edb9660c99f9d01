// SPDX-License-Identifier: AGPL-3.0-or-later

//! Event queue with a deferred initial sort.

use std::cmp::Ordering;

use num_traits::Float;

use crate::sweep_event::{compare_events, EventArena, EventId};

/// Priority queue over event handles.
///
/// Events enqueued before the first dequeue are buffered unsorted; the first
/// dequeue sorts the buffer once. Later enqueues (subdivision products) keep
/// the order with a backward linear insertion, which stays cheap because new
/// events sort close to the current sweep position at the tail.
#[derive(Debug)]
pub struct EventQueue {
    /// Descending once `sorted` is set; the next event sits at the tail.
    events: Vec<EventId>,
    sorted: bool,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        EventQueue {
            events: Vec::new(),
            sorted: false,
        }
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Add an event.
    pub fn enqueue<T: Float>(&mut self, arena: &EventArena<T>, event: EventId) {
        if !self.sorted {
            self.events.push(event);
            return;
        }

        let mut i = self.events.len();
        while i > 0 && compare_events(arena, event, self.events[i - 1]) == Ordering::Greater {
            i -= 1;
        }
        self.events.insert(i, event);
    }

    /// Remove and return the next event in sweep order.
    pub fn dequeue<T: Float>(&mut self, arena: &EventArena<T>) -> Option<EventId> {
        if !self.sorted {
            self.events.sort_by(|&a, &b| compare_events(arena, b, a));
            self.sorted = true;
        }
        self.events.pop()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        EventQueue::new()
    }
}
