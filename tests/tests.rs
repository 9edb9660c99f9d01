// SPDX-License-Identifier: AGPL-3.0-or-later

//! End-to-end tests of the boolean operations.

use polygon_booleanop::{
    boolean_op, difference, intersection, union, xor, Contour, Operation, OperationError, Point,
    Polygon,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ring of a contour in canonical form: closing duplicate removed, rotated so
/// the lexicographically smallest vertex comes first, direction normalized.
fn normalized_ring(contour: &Contour<f64>) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = contour.points().map(|p| (p.x, p.y)).collect();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    let min_index = pts
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap();
    pts.rotate_left(min_index);
    if pts.len() > 2 && pts[1] > pts[pts.len() - 1] {
        pts[1..].reverse();
    }
    pts
}

fn normalized_rings(polygon: &Polygon<f64>) -> Vec<Vec<(f64, f64)>> {
    let mut rings: Vec<_> = polygon.contours().map(normalized_ring).collect();
    rings.sort_by(|a, b| a.partial_cmp(b).unwrap());
    rings
}

fn assert_ring_approx_eq(actual: &[(f64, f64)], expected: &[(f64, f64)], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "ring length mismatch");
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a.0 - e.0).abs() <= tolerance && (a.1 - e.1).abs() <= tolerance,
            "vertex {:?} differs from expected {:?}",
            a,
            e
        );
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn subject_square() -> Polygon<f64> {
    Polygon::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
}

fn clipping_square() -> Polygon<f64> {
    Polygon::from(vec![(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)])
}

#[test]
fn test_intersection_of_overlapping_squares() {
    init_logging();
    let result = intersection(&subject_square(), &clipping_square()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        normalized_ring(result.contour(0)),
        vec![(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]
    );
}

#[test]
fn test_union_of_overlapping_squares() {
    init_logging();
    let result = union(&subject_square(), &clipping_square()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        normalized_ring(result.contour(0)),
        vec![
            (0.0, 0.0),
            (0.0, 4.0),
            (2.0, 4.0),
            (2.0, 6.0),
            (6.0, 6.0),
            (6.0, 2.0),
            (4.0, 2.0),
            (4.0, 0.0),
        ]
    );
    assert_eq!(result.contour(0).signed_area().abs() / 2.0, 28.0);
}

#[test]
fn test_difference_of_overlapping_squares() {
    init_logging();
    let result = difference(&subject_square(), &clipping_square()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        normalized_ring(result.contour(0)),
        vec![
            (0.0, 0.0),
            (0.0, 4.0),
            (2.0, 4.0),
            (2.0, 2.0),
            (4.0, 2.0),
            (4.0, 0.0),
        ]
    );
    assert_eq!(result.contour(0).signed_area().abs() / 2.0, 12.0);
}

#[test]
fn test_xor_of_overlapping_squares() {
    init_logging();
    let result = xor(&subject_square(), &clipping_square()).unwrap();
    assert!(!result.is_empty());

    // Interior probes: in exactly one operand -> in, in both or neither -> out.
    assert!(result.contains_point(Point::new(1.0, 1.0)));
    assert!(result.contains_point(Point::new(3.0, 1.0)));
    assert!(result.contains_point(Point::new(1.0, 3.0)));
    assert!(result.contains_point(Point::new(5.0, 5.0)));
    assert!(result.contains_point(Point::new(5.0, 3.0)));
    assert!(!result.contains_point(Point::new(3.0, 3.0)));
    assert!(!result.contains_point(Point::new(2.5, 2.5)));
    assert!(!result.contains_point(Point::new(7.0, 7.0)));
}

#[test]
fn test_operations_commute() {
    let a = subject_square();
    let b = clipping_square();

    for operation in [Operation::Intersection, Operation::Union, Operation::Xor] {
        let ab = boolean_op(&a, &b, operation).unwrap();
        let ba = boolean_op(&b, &a, operation).unwrap();
        assert_eq!(
            normalized_rings(&ab),
            normalized_rings(&ba),
            "{:?} is not symmetric",
            operation
        );
    }
}

#[test]
fn test_self_operations() {
    let a = subject_square();
    let expected = vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];

    let u = union(&a, &a).unwrap();
    assert_eq!(u.len(), 1);
    assert_eq!(normalized_ring(u.contour(0)), expected);

    let i = intersection(&a, &a).unwrap();
    assert_eq!(i.len(), 1);
    assert_eq!(normalized_ring(i.contour(0)), expected);

    assert!(difference(&a, &a).unwrap().is_empty());
    assert!(xor(&a, &a).unwrap().is_empty());
}

#[test]
fn test_empty_operand_shortcuts() {
    let a = subject_square();
    let empty = Polygon::new();

    assert_eq!(union(&a, &empty).unwrap(), a);
    assert_eq!(union(&empty, &a).unwrap(), a);
    assert_eq!(xor(&a, &empty).unwrap(), a);
    assert_eq!(difference(&a, &empty).unwrap(), a);
    assert!(difference(&empty, &a).unwrap().is_empty());
    assert!(intersection(&a, &empty).unwrap().is_empty());
    assert!(intersection(&empty, &a).unwrap().is_empty());
    assert!(union(&empty, &empty).unwrap().is_empty());
}

#[test]
fn test_disjoint_operands() {
    let a = subject_square();
    let b = Polygon::from(vec![(10.0, 10.0), (12.0, 10.0), (12.0, 12.0), (10.0, 12.0)]);

    assert!(intersection(&a, &b).unwrap().is_empty());
    assert_eq!(difference(&a, &b).unwrap(), a);

    let u = union(&a, &b).unwrap();
    assert_eq!(u.len(), 2);
    assert_eq!(u.contour(0), a.contour(0));
    assert_eq!(u.contour(1), b.contour(0));
}

#[test]
fn test_same_polygon_overlapping_edges_is_an_error() {
    // Two subject contours sharing a collinear piece of boundary.
    let mut subject = subject_square();
    subject.push(Contour::from(vec![
        (1.0, 0.0),
        (6.0, 0.0),
        (6.0, -2.0),
        (1.0, -2.0),
    ]));
    let clipping = clipping_square();

    for operation in [
        Operation::Intersection,
        Operation::Union,
        Operation::Difference,
        Operation::Xor,
    ] {
        let result = boolean_op(&subject, &clipping, operation);
        assert_eq!(
            result.unwrap_err(),
            OperationError::UnsupportedOverlappingEdges
        );
    }
}

#[test]
fn test_duplicate_vertices_are_ignored() {
    let subject = Polygon::from(vec![
        (0.0, 0.0),
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (4.0, 4.0),
        (0.0, 4.0),
    ]);
    let result = intersection(&subject, &clipping_square()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        normalized_ring(result.contour(0)),
        vec![(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]
    );
}

#[test]
fn test_union_with_hole_and_island() {
    // A square with a hole, united with an island inside the hole.
    let mut subject = Polygon::from(vec![(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)]);
    subject.push(Contour::from(vec![
        (2.0, 2.0),
        (6.0, 2.0),
        (6.0, 6.0),
        (2.0, 6.0),
    ]));
    let clipping = Polygon::from(vec![(3.0, 3.0), (5.0, 3.0), (5.0, 5.0), (3.0, 5.0)]);

    let result = union(&subject, &clipping).unwrap();

    assert_eq!(result.len(), 3);
    assert!(result.contains_point(Point::new(1.0, 1.0)));
    assert!(!result.contains_point(Point::new(2.5, 2.5)));
    assert!(result.contains_point(Point::new(4.0, 4.0)));
    assert!(result.contains_point(Point::new(7.0, 7.0)));
    assert!(!result.contains_point(Point::new(9.0, 9.0)));
}

#[test]
fn test_intersection_with_hole() {
    // Clipping a square with a holed polygon removes the hole region.
    let mut subject = Polygon::from(vec![(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)]);
    subject.push(Contour::from(vec![
        (2.0, 2.0),
        (6.0, 2.0),
        (6.0, 6.0),
        (2.0, 6.0),
    ]));
    let clipping = Polygon::from(vec![(1.0, 1.0), (7.0, 1.0), (7.0, 7.0), (1.0, 7.0)]);

    let result = intersection(&subject, &clipping).unwrap();

    assert_eq!(result.len(), 2);
    assert!(result.contains_point(Point::new(1.5, 1.5)));
    assert!(!result.contains_point(Point::new(4.0, 4.0)));
    assert!(!result.contains_point(Point::new(0.5, 0.5)));
}

#[test]
fn test_sloped_intersection_within_tolerance() {
    // Triangle edges hit the clip boundary at x = 1 with non-terminating
    // fractions.
    let subject = Polygon::from(vec![(0.0, 0.0), (3.0, 1.0), (0.0, 2.0)]);
    let clipping = Polygon::from(vec![(1.0, 0.0), (4.0, 0.0), (4.0, 3.0), (1.0, 3.0)]);

    let result = intersection(&subject, &clipping).unwrap();

    assert_eq!(result.len(), 1);
    let ring = normalized_ring(result.contour(0));
    assert_ring_approx_eq(
        &ring,
        &[(1.0, 1.0 / 3.0), (1.0, 5.0 / 3.0), (3.0, 1.0)],
        1e-6,
    );
}

#[test]
fn test_operations_match_pointwise_semantics() {
    let a = subject_square();
    let b = clipping_square();

    let i = intersection(&a, &b).unwrap();
    let u = union(&a, &b).unwrap();
    let d = difference(&a, &b).unwrap();
    let x = xor(&a, &b).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let p = Point::new(rng.gen_range(-1.0..7.0), rng.gen_range(-1.0..7.0));
        let in_a = a.contains_point(p);
        let in_b = b.contains_point(p);

        assert_eq!(i.contains_point(p), in_a && in_b, "intersection at {:?}", p);
        assert_eq!(u.contains_point(p), in_a || in_b, "union at {:?}", p);
        assert_eq!(d.contains_point(p), in_a && !in_b, "difference at {:?}", p);
        assert_eq!(x.contains_point(p), in_a != in_b, "xor at {:?}", p);
    }
}
