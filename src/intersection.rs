// SPDX-License-Identifier: AGPL-3.0-or-later

//! Segment intersection with endpoint snapping.

use num_traits::Float;

use crate::point::Point;
use crate::segment::Segment;

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T> {
    /// The segments do not meet.
    None,
    /// The segments meet in a single point.
    Point(Point<T>),
    /// The segments are collinear and share more than one point.
    Overlap(Point<T>, Point<T>),
}

/// Intersect the parameter intervals `[u0, u1]` and `[v0, v1]`, both sorted.
/// Returns the overlap as one or two interval bounds.
fn interval_intersection<T: Float>(u0: T, u1: T, v0: T, v1: T) -> Option<(T, Option<T>)> {
    if u1 < v0 || u0 > v1 {
        return None;
    }

    if u1 > v0 {
        if u0 < v1 {
            let w0 = if u0 < v0 { v0 } else { u0 };
            let w1 = if u1 > v1 { v1 } else { u1 };
            Some((w0, Some(w1)))
        } else {
            // u0 == v1
            Some((u0, None))
        }
    } else {
        // u1 == v0
        Some((u1, None))
    }
}

/// Snap `point` onto the nearest segment endpoint when it lies within the
/// snapping distance, so subdivisions land exactly on existing vertices.
fn snap_to_endpoints<T: Float>(point: Point<T>, s0: &Segment<T>, s1: &Segment<T>) -> Point<T> {
    let threshold = T::from(1e-8).unwrap();

    let mut p = point;
    if p.distance_to(&s0.begin) < threshold {
        p = s0.begin;
    }
    if p.distance_to(&s0.end) < threshold {
        p = s0.end;
    }
    if p.distance_to(&s1.begin) < threshold {
        p = s1.begin;
    }
    if p.distance_to(&s1.end) < threshold {
        p = s1.end;
    }
    p
}

/// Compute the intersection of two segments.
///
/// Near-parallel segments are treated as parallel using a relative epsilon on
/// the cross product; computed points within `1e-8` of a segment endpoint are
/// snapped onto that endpoint.
pub fn segment_intersection<T: Float>(
    s0: &Segment<T>,
    s1: &Segment<T>,
) -> SegmentIntersection<T> {
    let sqr_epsilon = T::from(1e-7).unwrap();

    let p0 = s0.begin;
    let d0 = Point::new(s0.end.x - p0.x, s0.end.y - p0.y);
    let p1 = s1.begin;
    let d1 = Point::new(s1.end.x - p1.x, s1.end.y - p1.y);

    let e = Point::new(p1.x - p0.x, p1.y - p0.y);
    let kross = d0.x * d1.y - d0.y * d1.x;
    let sqr_kross = kross * kross;
    let sqr_len0 = d0.x * d0.x + d0.y * d0.y;
    let sqr_len1 = d1.x * d1.x + d1.y * d1.y;

    if sqr_kross > sqr_epsilon * sqr_len0 * sqr_len1 {
        // Lines intersect in a single point; check it lies on both segments.
        let s = (e.x * d1.y - e.y * d1.x) / kross;
        if s < T::zero() || s > T::one() {
            return SegmentIntersection::None;
        }
        let t = (e.x * d0.y - e.y * d0.x) / kross;
        if t < T::zero() || t > T::one() {
            return SegmentIntersection::None;
        }

        let p = Point::new(p0.x + s * d0.x, p0.y + s * d0.y);
        return SegmentIntersection::Point(snap_to_endpoints(p, s0, s1));
    }

    // Parallel segments; collinear only when the offset is parallel too.
    let sqr_len_e = e.x * e.x + e.y * e.y;
    let kross_e = e.x * d0.y - e.y * d0.x;
    if kross_e * kross_e > sqr_epsilon * sqr_len0 * sqr_len_e {
        return SegmentIntersection::None;
    }

    // Project s1 onto the parameter space of s0 and overlap the intervals.
    let s0_param = (d0.x * e.x + d0.y * e.y) / sqr_len0;
    let s1_param = s0_param + (d0.x * d1.x + d0.y * d1.y) / sqr_len0;
    let smin = s0_param.min(s1_param);
    let smax = s0_param.max(s1_param);

    match interval_intersection(T::zero(), T::one(), smin, smax) {
        None => SegmentIntersection::None,
        Some((w0, None)) => {
            let p = Point::new(p0.x + w0 * d0.x, p0.y + w0 * d0.y);
            SegmentIntersection::Point(snap_to_endpoints(p, s0, s1))
        }
        Some((w0, Some(w1))) => {
            let pa = Point::new(p0.x + w0 * d0.x, p0.y + w0 * d0.y);
            let pb = Point::new(p0.x + w1 * d0.x, p0.y + w1 * d0.y);
            SegmentIntersection::Overlap(snap_to_endpoints(pa, s0, s1), snap_to_endpoints(pb, s0, s1))
        }
    }
}
