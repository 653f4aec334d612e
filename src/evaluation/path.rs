//! Path evaluator that sums distance, duration and weighted cost.

use crate::error::RouteError;
use crate::graph::CostGraph;
use crate::models::Weights;

/// Aggregate metrics of one full path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathTotals {
    /// Sum of edge distances.
    pub distance: f64,
    /// Sum of edge durations.
    pub duration: f64,
    /// Sum of weighted edge costs.
    pub cost: f64,
}

impl PathTotals {
    /// Adds one edge's contribution.
    #[inline]
    pub fn add(&mut self, distance: f64, duration: f64, cost: f64) {
        self.distance += distance;
        self.duration += duration;
        self.cost += cost;
    }
}

/// Scores paths against a cost graph under a fixed weight vector.
///
/// Walks consecutive location pairs, accumulating distance, duration and
/// `weights.cost(edge)` in path order.
///
/// # Examples
///
/// ```
/// use waypoint_router::evaluation::PathEvaluator;
/// use waypoint_router::graph::CostGraph;
/// use waypoint_router::models::{EdgeRecord, Weights};
///
/// let graph = CostGraph::from_records(vec![
///     EdgeRecord::new("A", "B", 1.0, 2.0),
///     EdgeRecord::new("B", "C", 1.0, 2.0),
/// ]).unwrap();
/// let weights = Weights::new(1.0, 0.0).unwrap();
/// let evaluator = PathEvaluator::new(&graph, weights);
///
/// let totals = evaluator.evaluate(&["A", "B", "C"]).unwrap();
/// assert_eq!(totals.distance, 2.0);
/// assert_eq!(totals.duration, 4.0);
/// assert_eq!(totals.cost, 2.0);
/// ```
pub struct PathEvaluator<'a> {
    graph: &'a CostGraph,
    weights: Weights,
}

impl<'a> PathEvaluator<'a> {
    /// Creates an evaluator over the given graph.
    pub fn new(graph: &'a CostGraph, weights: Weights) -> Self {
        Self { graph, weights }
    }

    /// Weight vector used for scoring.
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Sums the metrics of every consecutive pair in `path`.
    ///
    /// A path with fewer than two locations has zero totals. Fails with
    /// [`RouteError::MissingEdge`] on the first pair without a metric.
    pub fn evaluate<S: AsRef<str>>(&self, path: &[S]) -> Result<PathTotals, RouteError> {
        let mut totals = PathTotals::default();
        for pair in path.windows(2) {
            let metric = self
                .graph
                .require_edge(pair[0].as_ref(), pair[1].as_ref())?;
            totals.add(
                metric.distance(),
                metric.duration(),
                self.weights.cost(&metric),
            );
        }
        Ok(totals)
    }
}
