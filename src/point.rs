// SPDX-License-Identifier: AGPL-3.0-or-later

//! Point type and the signed-area primitive used by all orientation tests.

use num_traits::Float;

/// A point in the plane.
///
/// Equality is exact. Subdivision points are snapped onto existing endpoints
/// before they are compared, so no epsilon is applied here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a new point.
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point<T>) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

/// Twice the signed area of the triangle `(p0, p1, p2)`.
///
/// Positive when the triangle winds counter-clockwise, zero when the points
/// are collinear.
pub fn signed_area<T: Float>(p0: Point<T>, p1: Point<T>, p2: Point<T>) -> T {
    (p0.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p0.y - p2.y)
}
