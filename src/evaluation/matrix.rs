//! Dense metric matrix over the locations of one solve.

use super::PathTotals;
use crate::error::RouteError;
use crate::graph::CostGraph;
use crate::models::Weights;

/// A dense n×n table of `(distance, duration, cost)` stored in row-major
/// order, indexed by position in the location list it was built from.
///
/// Costs are computed once per edge with [`Weights::cost`], so summing them
/// in path order gives exactly the same floating-point result as scoring the
/// path with [`PathEvaluator`](super::PathEvaluator).
///
/// # Examples
///
/// ```
/// use waypoint_router::evaluation::MetricMatrix;
/// use waypoint_router::graph::CostGraph;
/// use waypoint_router::models::{EdgeRecord, Weights};
///
/// let graph = CostGraph::from_records(vec![
///     EdgeRecord::new("A", "B", 3.0, 4.0),
///     EdgeRecord::new("B", "A", 3.0, 4.0),
/// ]).unwrap();
/// let m = MetricMatrix::build(&graph, &["A", "B"], Weights::new(1.0, 1.0).unwrap()).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.cost(0, 1), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct MetricMatrix {
    distance: Vec<f64>,
    duration: Vec<f64>,
    cost: Vec<f64>,
    size: usize,
}

impl MetricMatrix {
    /// Looks up every ordered pair of distinct `locations` in the graph.
    ///
    /// Fails with [`RouteError::MissingEdge`] on the first missing pair, in
    /// the same order as [`CostGraph::verify_reachable`].
    pub fn build<S: AsRef<str>>(
        graph: &CostGraph,
        locations: &[S],
        weights: Weights,
    ) -> Result<Self, RouteError> {
        let n = locations.len();
        let mut m = Self {
            distance: vec![0.0; n * n],
            duration: vec![0.0; n * n],
            cost: vec![0.0; n * n],
            size: n,
        };
        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                let metric = graph.require_edge(from.as_ref(), to.as_ref())?;
                let k = i * n + j;
                m.distance[k] = metric.distance();
                m.duration[k] = metric.duration();
                m.cost[k] = weights.cost(&metric);
            }
        }
        Ok(m)
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weighted cost from index `from` to index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost[from * self.size + to]
    }

    /// Distance from index `from` to index `to`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distance[from * self.size + to]
    }

    /// Duration from index `from` to index `to`.
    #[inline]
    pub fn duration(&self, from: usize, to: usize) -> f64 {
        self.duration[from * self.size + to]
    }

    /// Weighted cost of the index path `first, middle.., last`.
    #[inline]
    pub fn path_cost(&self, first: usize, middle: &[usize], last: usize) -> f64 {
        let mut cost = 0.0;
        let mut prev = first;
        for &next in middle.iter().chain(std::iter::once(&last)) {
            cost += self.cost(prev, next);
            prev = next;
        }
        cost
    }

    /// Full totals of the index path `first, middle.., last`.
    pub fn path_totals(&self, first: usize, middle: &[usize], last: usize) -> PathTotals {
        let mut totals = PathTotals::default();
        let mut prev = first;
        for &next in middle.iter().chain(std::iter::once(&last)) {
            totals.add(
                self.distance(prev, next),
                self.duration(prev, next),
                self.cost(prev, next),
            );
            prev = next;
        }
        totals
    }
}
