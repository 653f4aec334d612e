//! Parallel exhaustive solver over a dense metric matrix.
//!
//! # Algorithm
//!
//! The locations of the request are mapped to indices (`0` = start,
//! `1..=k` = required stops in input order, `k + 1` = end) and every edge is
//! looked up once into a [`MetricMatrix`]. The permutation space is split
//! into `k` shards by the first visited stop. Each shard enumerates its
//! orderings in lexicographic order in place and keeps its first strictly
//! cheapest candidate; shards are merged in shard order with the same strict
//! comparison. This visits candidates in exactly the order of
//! [`ReferenceSolver`](super::ReferenceSolver), so ties resolve identically,
//! and per-edge costs are summed in the same order, so costs match bit for
//! bit.
//!
//! # Complexity
//!
//! O(k!·k) total work spread over up to `k` threads, O(k²) memory for the
//! matrix.

use rayon::prelude::*;
use tracing::debug;

use super::{candidate_locations, next_permutation, validate_input, RouteSolver};
use crate::error::RouteError;
use crate::evaluation::MetricMatrix;
use crate::graph::CostGraph;
use crate::models::{Solution, Weights};

/// Best ordering found within one shard.
struct ShardBest {
    cost: f64,
    order: Vec<usize>,
}

/// Multi-threaded exhaustive solver with the same contract as the reference
/// solver.
///
/// # Examples
///
/// ```
/// use waypoint_router::graph::CostGraph;
/// use waypoint_router::models::{EdgeRecord, Weights};
/// use waypoint_router::solver::{AcceleratedSolver, ReferenceSolver, RouteSolver};
///
/// let mut records = Vec::new();
/// for (a, b, d, t) in [("A", "B", 1.0, 2.0), ("B", "C", 1.0, 2.0), ("A", "C", 5.0, 5.0)] {
///     records.push(EdgeRecord::new(a, b, d, t));
///     records.push(EdgeRecord::new(b, a, d, t));
/// }
/// let graph = CostGraph::from_records(records).unwrap();
/// let w = Weights::new(1.0, 0.0).unwrap();
///
/// let fast = AcceleratedSolver.solve(&graph, "A", "C", &["B"], w).unwrap();
/// let slow = ReferenceSolver.solve(&graph, "A", "C", &["B"], w).unwrap();
/// assert_eq!(fast, slow);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceleratedSolver;

impl AcceleratedSolver {
    /// Enumerates all orderings whose first stop is `first` (a node index).
    fn solve_shard(matrix: &MetricMatrix, first: usize, k: usize) -> ShardBest {
        let end = k + 1;
        let mut order: Vec<usize> = Vec::with_capacity(k);
        order.push(first);
        order.extend((1..=k).filter(|&i| i != first));

        let mut best = ShardBest {
            cost: matrix.path_cost(0, &order, end),
            order: order.clone(),
        };
        while next_permutation(&mut order[1..]) {
            let cost = matrix.path_cost(0, &order, end);
            if cost < best.cost {
                best.cost = cost;
                best.order.copy_from_slice(&order);
            }
        }
        best
    }
}

impl RouteSolver for AcceleratedSolver {
    fn name(&self) -> &'static str {
        "accelerated"
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
        let locations = candidate_locations(start, end, required_stops);
        let matrix = MetricMatrix::build(graph, &locations, weights)?;

        let k = required_stops.len();
        let end_index = k + 1;
        debug!(
            solver = self.name(),
            stops = k,
            shards = k.max(1),
            "enumerating candidate paths"
        );

        let order = (1..k + 1)
            .into_par_iter()
            .map(|first| Self::solve_shard(&matrix, first, k))
            .reduce_with(|best, shard| if shard.cost < best.cost { shard } else { best })
            .map(|best| best.order)
            .unwrap_or_default();

        let totals = matrix.path_totals(0, &order, end_index);
        debug!(solver = self.name(), cost = totals.cost, "best path found");

        let path = std::iter::once(start)
            .chain(order.iter().map(|&i| required_stops[i - 1]))
            .chain(std::iter::once(end))
            .map(str::to_string)
            .collect();
        Ok(Solution::new(path, totals.cost, totals.distance, totals.duration))
    }
}
