//! Pair-keyed cost graph.

use std::collections::HashMap;

use crate::error::RouteError;
use crate::models::{EdgeMetric, EdgeRecord, LocationId};

/// A directed graph of distance/duration metrics keyed by ordered location
/// pairs.
///
/// Built from flat edge records; a later record for the same `(from, to)`
/// pair replaces the earlier one. The graph is read-only during solving and
/// may be shared across threads.
///
/// # Examples
///
/// ```
/// use waypoint_router::graph::CostGraph;
/// use waypoint_router::models::EdgeRecord;
///
/// let graph = CostGraph::from_records(vec![
///     EdgeRecord::new("A", "B", 1.0, 2.0),
///     EdgeRecord::new("B", "A", 1.0, 2.0),
/// ]).unwrap();
/// assert_eq!(graph.edge("A", "B").unwrap().distance(), 1.0);
/// assert!(graph.edge("A", "C").is_none());
/// assert!(graph.verify_reachable(&["A", "B"]).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CostGraph {
    edges: HashMap<LocationId, HashMap<LocationId, EdgeMetric>>,
    num_edges: usize,
}

impl CostGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from flat records.
    ///
    /// Duplicate pairs are resolved last-write-wins. Returns
    /// [`RouteError::InvalidInput`] if any record carries a negative or
    /// non-finite metric.
    pub fn from_records<I>(records: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            let metric = EdgeMetric::new(record.distance, record.duration).map_err(|e| {
                RouteError::InvalidInput(format!("edge '{}' -> '{}': {e}", record.from, record.to))
            })?;
            graph.insert(record.from, record.to, metric);
        }
        Ok(graph)
    }

    /// Stores the metric for `(from, to)`, replacing any previous value.
    pub fn insert(
        &mut self,
        from: impl Into<LocationId>,
        to: impl Into<LocationId>,
        metric: EdgeMetric,
    ) {
        let previous = self
            .edges
            .entry(from.into())
            .or_default()
            .insert(to.into(), metric);
        if previous.is_none() {
            self.num_edges += 1;
        }
    }

    /// Overlays every edge of `other` onto this graph (last write wins).
    pub fn merge(&mut self, other: CostGraph) {
        for (from, targets) in other.edges {
            for (to, metric) in targets {
                self.insert(from.clone(), to, metric);
            }
        }
    }

    /// Returns the metric for `(from, to)`, if stored.
    pub fn edge(&self, from: &str, to: &str) -> Option<EdgeMetric> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Like [`edge`](Self::edge), but a missing metric is a
    /// [`RouteError::MissingEdge`].
    pub fn require_edge(&self, from: &str, to: &str) -> Result<EdgeMetric, RouteError> {
        self.edge(from, to)
            .ok_or_else(|| RouteError::missing_edge(from, to))
    }

    /// Confirms that every ordered pair of distinct entries in `locations`
    /// has a stored metric.
    ///
    /// Pairs are checked in the order given; the first missing pair is
    /// reported as [`RouteError::MissingEdge`].
    pub fn verify_reachable<S: AsRef<str>>(&self, locations: &[S]) -> Result<(), RouteError> {
        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i == j {
                    continue;
                }
                self.require_edge(from.as_ref(), to.as_ref())?;
            }
        }
        Ok(())
    }

    /// Number of stored ordered pairs.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if no edge is stored.
    pub fn is_empty(&self) -> bool {
        self.num_edges == 0
    }

    /// Returns `true` if every stored edge has a reverse edge whose distance
    /// and duration match within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.edges.iter().all(|(from, targets)| {
            targets.iter().all(|(to, m)| match self.edge(to, from) {
                Some(r) => {
                    (m.distance() - r.distance()).abs() <= tol
                        && (m.duration() - r.duration()).abs() <= tol
                }
                None => false,
            })
        })
    }
}
