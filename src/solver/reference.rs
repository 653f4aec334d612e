//! Reference exhaustive solver.
//!
//! # Algorithm
//!
//! Enumerate every ordering of the required stops in lexicographic order of
//! their input positions, score the full path `start, p_1, …, p_k, end` edge
//! by edge through the cost graph, and keep the first candidate with the
//! strictly lowest cost.
//!
//! # Complexity
//!
//! O(k!·k) time, O(k) extra space, where k = number of required stops.

use tracing::debug;

use super::{candidate_locations, validate_input, Permutations, RouteSolver};
use crate::error::RouteError;
use crate::evaluation::{PathEvaluator, PathTotals};
use crate::graph::CostGraph;
use crate::models::{Solution, Weights};

/// Single-threaded exhaustive solver scoring paths by graph lookups.
///
/// # Examples
///
/// ```
/// use waypoint_router::graph::CostGraph;
/// use waypoint_router::models::{EdgeRecord, Weights};
/// use waypoint_router::solver::{ReferenceSolver, RouteSolver};
///
/// let mut records = Vec::new();
/// for (a, b, d, t) in [("A", "B", 1.0, 2.0), ("B", "C", 1.0, 2.0), ("A", "C", 5.0, 5.0)] {
///     records.push(EdgeRecord::new(a, b, d, t));
///     records.push(EdgeRecord::new(b, a, d, t));
/// }
/// let graph = CostGraph::from_records(records).unwrap();
///
/// let sol = ReferenceSolver
///     .solve(&graph, "A", "C", &["B"], Weights::new(1.0, 0.0).unwrap())
///     .unwrap();
/// assert_eq!(sol.path(), ["A", "B", "C"]);
/// assert_eq!(sol.total_cost(), 2.0);
/// assert_eq!(sol.total_duration(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSolver;

impl RouteSolver for ReferenceSolver {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn solve(
        &self,
        graph: &CostGraph,
        start: &str,
        end: &str,
        required_stops: &[&str],
        weights: Weights,
    ) -> Result<Solution, RouteError> {
        validate_input(start, end, required_stops)?;
        graph.verify_reachable(&candidate_locations(start, end, required_stops))?;

        debug!(
            solver = self.name(),
            stops = required_stops.len(),
            "enumerating candidate paths"
        );

        let evaluator = PathEvaluator::new(graph, weights);
        let mut path: Vec<&str> = Vec::with_capacity(required_stops.len() + 2);
        let mut score = |order: &[usize]| {
            path.clear();
            path.push(start);
            path.extend(order.iter().map(|&i| required_stops[i]));
            path.push(end);
            evaluator.evaluate(&path)
        };

        // The identity ordering is always first, even for zero stops.
        let mut orders = Permutations::new(required_stops.len());
        let mut order: Vec<usize> = orders.next().unwrap_or_default();
        let mut totals: PathTotals = score(&order)?;
        for candidate in orders {
            let candidate_totals = score(&candidate)?;
            if candidate_totals.cost < totals.cost {
                order = candidate;
                totals = candidate_totals;
            }
        }

        debug!(solver = self.name(), cost = totals.cost, "best path found");

        let mut full = Vec::with_capacity(order.len() + 2);
        full.push(start.to_string());
        full.extend(order.iter().map(|&i| required_stops[i].to_string()));
        full.push(end.to_string());
        Ok(Solution::new(full, totals.cost, totals.distance, totals.duration))
    }
}
