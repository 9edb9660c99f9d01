// SPDX-License-Identifier: AGPL-3.0-or-later

#![deny(missing_docs)]

//! Boolean operations on polygons: intersection, union, difference and
//! symmetric difference, computed with a left-to-right plane sweep.
//!
//! Input polygons are lists of contours; holes are contours like any other,
//! interpreted with the even-odd rule. Contours do not need to repeat their
//! first point; contours assembled by the sweep repeat it. Trivial cases
//! (an empty operand, disjoint bounding boxes) return operand contours
//! unchanged.
//!
//! # Example
//! ```
//! use polygon_booleanop::{union, Polygon};
//!
//! let a: Polygon<f64> = Polygon::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
//! let b = Polygon::from(vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
//!
//! let result = union(&a, &b).unwrap();
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.contour(0).signed_area().abs() / 2.0, 7.0);
//! ```

use thiserror::Error;

mod booleanop;
mod compare_segments;
mod connector;
mod event_queue;
mod intersection;
mod point;
mod point_chain;
mod polygon;
mod possible_intersection;
mod segment;
mod sweep_event;
mod sweep_line;

// API exports.
pub use booleanop::{boolean_op, difference, intersection, union, xor};
pub use point::{signed_area, Point};
pub use polygon::{Contour, Polygon, Rect};
pub use segment::Segment;

/// Type of boolean operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    /// Compute the boolean AND.
    Intersection,
    /// Compute the boolean difference `A & (not B)`.
    Difference,
    /// Compute the boolean OR.
    Union,
    /// Compute the boolean XOR.
    Xor,
}

/// Errors reported by the boolean operations.
///
/// A failed operation yields no partial result.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperationError {
    /// An operand contains two overlapping collinear edges. Such polygons
    /// are not supported.
    #[error("polygon has overlapping edges")]
    UnsupportedOverlappingEdges,
}
