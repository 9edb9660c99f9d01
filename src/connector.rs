// SPDX-License-Identifier: AGPL-3.0-or-later

//! Stitching of contributed segments into closed result contours.

use log::debug;
use num_traits::Float;

use crate::point_chain::PointChain;
use crate::polygon::{Contour, Polygon};
use crate::segment::Segment;

/// Collects result segments and links them into point chains.
///
/// Segments arrive in sweep completion order and in arbitrary direction; a
/// segment may extend an open chain at either end, close it, or merge two
/// open chains.
#[derive(Debug)]
pub struct Connector<T> {
    open: Vec<PointChain<T>>,
    closed: Vec<PointChain<T>>,
}

impl<T: Float> Connector<T> {
    /// Create an empty connector.
    pub fn new() -> Self {
        Connector {
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    /// Add a result segment.
    pub fn add(&mut self, segment: Segment<T>) {
        let mut linked = None;
        for (j, chain) in self.open.iter_mut().enumerate() {
            if chain.link_segment(&segment) {
                linked = Some(j);
                break;
            }
        }

        let j = match linked {
            Some(j) => j,
            None => {
                self.open.push(PointChain::new(&segment));
                return;
            }
        };

        if self.open[j].is_closed() {
            if self.open[j].len() == 2 {
                // A segment folding straight back; drop the closure.
                self.open[j].reopen();
                return;
            }
            let chain = self.open.remove(j);
            self.closed.push(chain);
            return;
        }

        // The extended chain may now connect to one of the later chains.
        let mut absorbed = None;
        for i in j + 1..self.open.len() {
            let (head, tail) = self.open.split_at_mut(i);
            if head[j].link_chain(&mut tail[0]) {
                absorbed = Some(i);
                break;
            }
        }
        if let Some(i) = absorbed {
            self.open.remove(i);
        }
    }

    /// Number of chains closed so far.
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Turn the closed chains into a polygon. Every contour is explicitly
    /// closed by repeating its first point; chains still open are dropped.
    pub fn to_polygon(&self) -> Polygon<T> {
        if !self.open.is_empty() {
            debug!("dropping {} unclosed point chain(s)", self.open.len());
        }

        let mut polygon = Polygon::new();
        for chain in &self.closed {
            let mut contour = Contour::new();
            for &point in chain.points() {
                contour.push(point);
            }
            if contour.len() > 0 && contour.point(contour.len() - 1) != contour.point(0) {
                contour.push(contour.point(0));
            }
            polygon.push(contour);
        }
        polygon
    }
}

impl<T: Float> Default for Connector<T> {
    fn default() -> Self {
        Connector::new()
    }
}
