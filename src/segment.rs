// SPDX-License-Identifier: AGPL-3.0-or-later

//! Directed line segments.

use crate::point::Point;

/// A directed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    /// Start point.
    pub begin: Point<T>,
    /// End point.
    pub end: Point<T>,
}

impl<T> Segment<T> {
    /// Create a new segment from `begin` to `end`.
    pub fn new(begin: Point<T>, end: Point<T>) -> Self {
        Segment { begin, end }
    }
}
