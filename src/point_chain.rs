// SPDX-License-Identifier: AGPL-3.0-or-later

//! Chains of points under assembly into result contours.

use std::collections::VecDeque;

use num_traits::Float;

use crate::point::Point;
use crate::segment::Segment;

/// An open or closed run of points.
#[derive(Debug, Clone)]
pub struct PointChain<T> {
    points: VecDeque<Point<T>>,
    closed: bool,
}

impl<T: Float> PointChain<T> {
    /// Start a new chain from a single segment.
    pub fn new(segment: &Segment<T>) -> Self {
        let mut points = VecDeque::with_capacity(2);
        points.push_back(segment.begin);
        points.push_back(segment.end);
        PointChain {
            points,
            closed: false,
        }
    }

    /// Has the chain been closed into a ring?
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points in the chain.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the chain holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the points front to back.
    pub fn points(&self) -> impl Iterator<Item = &Point<T>> {
        self.points.iter()
    }

    /// Discard a closure, leaving the chain open.
    pub(crate) fn reopen(&mut self) {
        self.closed = false;
    }

    /// Try to attach `segment` to either end of the chain. Marks the chain
    /// closed when the segment bridges both ends.
    pub fn link_segment(&mut self, segment: &Segment<T>) -> bool {
        let (front, back) = match (self.points.front(), self.points.back()) {
            (Some(&front), Some(&back)) => (front, back),
            _ => return false,
        };

        if segment.begin == front {
            if segment.end == back {
                self.closed = true;
            } else {
                self.points.push_front(segment.end);
            }
            return true;
        }

        if segment.end == back {
            if segment.begin == front {
                self.closed = true;
            } else {
                self.points.push_back(segment.begin);
            }
            return true;
        }

        if segment.end == front {
            if segment.begin == back {
                self.closed = true;
            } else {
                self.points.push_front(segment.begin);
            }
            return true;
        }

        if segment.begin == back {
            if segment.end == front {
                self.closed = true;
            } else {
                self.points.push_back(segment.end);
            }
            return true;
        }

        false
    }

    /// Try to merge `other` into this chain, reversing it where required.
    /// Drains `other` on success.
    pub fn link_chain(&mut self, other: &mut PointChain<T>) -> bool {
        let (front, back) = match (self.points.front(), self.points.back()) {
            (Some(&front), Some(&back)) => (front, back),
            _ => return false,
        };
        let (other_front, other_back) = match (other.points.front(), other.points.back()) {
            (Some(&f), Some(&b)) => (f, b),
            _ => return false,
        };

        if other_front == back {
            other.points.pop_front();
            self.points.extend(other.points.drain(..));
            return true;
        }

        if other_back == front {
            self.points.pop_front();
            for p in other.points.drain(..).rev() {
                self.points.push_front(p);
            }
            return true;
        }

        if other_front == front {
            self.points.pop_front();
            // Pushing front to front reverses the other chain.
            for p in other.points.drain(..) {
                self.points.push_front(p);
            }
            return true;
        }

        if other_back == back {
            self.points.pop_back();
            for p in other.points.drain(..).rev() {
                self.points.push_back(p);
            }
            return true;
        }

        false
    }
}
