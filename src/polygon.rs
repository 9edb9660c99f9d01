// SPDX-License-Identifier: AGPL-3.0-or-later

//! Contours, polygons and bounding boxes.

use num_traits::Float;

use crate::point::{signed_area, Point};
use crate::segment::Segment;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    /// Lower-left corner.
    pub min: Point<T>,
    /// Upper-right corner.
    pub max: Point<T>,
}

impl<T: Float> Rect<T> {
    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Rect<T>) -> Rect<T> {
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Check whether the boxes share no point.
    pub fn is_disjoint(&self, other: &Rect<T>) -> bool {
        self.min.x > other.max.x
            || other.min.x > self.max.x
            || self.min.y > other.max.y
            || other.min.y > self.max.y
    }
}

/// A closed sequence of vertices.
///
/// The closing edge back to the first vertex is implicit; contours need not
/// repeat their first point.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> Contour<T> {
    /// Create an empty contour.
    pub fn new() -> Self {
        Contour { points: Vec::new() }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a vertex.
    pub fn push(&mut self, point: Point<T>) {
        self.points.push(point);
    }

    /// Vertex at `index`.
    pub fn point(&self, index: usize) -> Point<T> {
        self.points[index]
    }

    /// Iterate over the vertices.
    pub fn points(&self) -> impl Iterator<Item = &Point<T>> {
        self.points.iter()
    }

    /// Edge starting at vertex `index`. The last vertex connects back to the
    /// first one.
    pub fn segment(&self, index: usize) -> Segment<T> {
        if index == self.len() - 1 {
            Segment::new(self.points[index], self.points[0])
        } else {
            Segment::new(self.points[index], self.points[index + 1])
        }
    }

    /// Bounding box of the vertices, `None` for an empty contour.
    pub fn bounding_box(&self) -> Option<Rect<T>> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect { min, max })
    }

    /// Twice the signed area of the contour (shoelace formula).
    pub fn signed_area(&self) -> T {
        let n = self.len();
        if n < 3 {
            return T::zero();
        }
        let mut acc = signed_area(self.points[0], self.points[1], self.points[2]);
        for i in 2..n - 1 {
            acc = acc + signed_area(self.points[0], self.points[i], self.points[i + 1]);
        }
        acc
    }

    /// Check whether the vertices wind counter-clockwise.
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() >= T::zero()
    }

    /// Reverse the vertex order.
    pub fn change_orientation(&mut self) {
        self.points.reverse();
    }

    /// Make the contour wind counter-clockwise.
    pub fn set_counter_clockwise(&mut self) {
        if !self.is_counter_clockwise() {
            self.change_orientation();
        }
    }

    /// Make the contour wind clockwise.
    pub fn set_clockwise(&mut self) {
        if self.is_counter_clockwise() {
            self.change_orientation();
        }
    }
}

impl<T: Float> Default for Contour<T> {
    fn default() -> Self {
        Contour::new()
    }
}

impl<T: Float> From<Vec<(T, T)>> for Contour<T> {
    fn from(points: Vec<(T, T)>) -> Self {
        Contour {
            points: points.into_iter().map(Point::from).collect(),
        }
    }
}

/// A polygon: a list of contours, possibly with holes.
///
/// Holes are ordinary contours; point containment follows the even-odd rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
    contours: Vec<Contour<T>>,
}

impl<T: Float> Polygon<T> {
    /// Create a polygon without any contours.
    pub fn new() -> Self {
        Polygon {
            contours: Vec::new(),
        }
    }

    /// Number of contours.
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    /// Check whether the polygon has no contours.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Append a contour.
    pub fn push(&mut self, contour: Contour<T>) {
        self.contours.push(contour);
    }

    /// Contour at `index`.
    pub fn contour(&self, index: usize) -> &Contour<T> {
        &self.contours[index]
    }

    /// Iterate over the contours.
    pub fn contours(&self) -> impl Iterator<Item = &Contour<T>> {
        self.contours.iter()
    }

    /// Bounding box over all contours, `None` when there are no vertices.
    pub fn bounding_box(&self) -> Option<Rect<T>> {
        self.contours
            .iter()
            .filter_map(|c| c.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    /// Even-odd point containment over all contours.
    ///
    /// Points exactly on the boundary may land on either side.
    pub fn contains_point(&self, point: Point<T>) -> bool {
        let mut inside = false;
        for contour in &self.contours {
            for i in 0..contour.len() {
                let s = contour.segment(i);
                let (a, b) = (s.begin, s.end);
                if (a.y > point.y) != (b.y > point.y) {
                    let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                    if x_cross > point.x {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }
}

impl<T: Float> Default for Polygon<T> {
    fn default() -> Self {
        Polygon::new()
    }
}

impl<T: Float> From<Vec<(T, T)>> for Polygon<T> {
    fn from(points: Vec<(T, T)>) -> Self {
        Polygon {
            contours: vec![Contour::from(points)],
        }
    }
}

impl<T: Float> From<Vec<Contour<T>>> for Polygon<T> {
    fn from(contours: Vec<Contour<T>>) -> Self {
        Polygon { contours }
    }
}
