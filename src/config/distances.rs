//! Distance table as produced by the distance provider.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RouteError;
use crate::graph::CostGraph;
use crate::models::{EdgeMetric, EdgeRecord, LocationId};

/// One `from → to` entry: a metric, or a marker string left by a failed
/// provider lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistanceEntry {
    /// Resolved distance and duration.
    Metric(EdgeMetric),
    /// Lookup failed upstream (typically `"Error"`).
    Failed(String),
}

/// Nested `from → to → metric` table, the on-disk shape of the distances
/// file:
///
/// ```json
/// { "distances": { "A": { "B": { "distance_km": 1.0, "duration_min": 2.0 } } } }
/// ```
///
/// # Examples
///
/// ```
/// use waypoint_router::config::DistanceTable;
///
/// let table: DistanceTable = serde_json::from_str(r#"{
///     "distances": {
///         "A": { "B": { "distance_km": 1.0, "duration_min": 2.0 }, "C": "Error" },
///         "B": { "A": { "distance_km": 1.0, "duration_min": 2.0 } }
///     }
/// }"#).unwrap();
/// let graph = table.to_graph().unwrap();
/// assert_eq!(graph.num_edges(), 2);
/// assert!(graph.edge("A", "C").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceTable {
    pub distances: BTreeMap<LocationId, BTreeMap<LocationId, DistanceEntry>>,
}

impl DistanceTable {
    /// Flattens the table into edge records.
    ///
    /// Failed entries and self-pairs are skipped; failed entries are logged
    /// and later surface as missing edges if a solve needs them.
    pub fn to_records(&self) -> Vec<EdgeRecord> {
        let mut records = Vec::new();
        for (from, targets) in &self.distances {
            for (to, entry) in targets {
                if from == to {
                    continue;
                }
                match entry {
                    DistanceEntry::Metric(m) => records.push(EdgeRecord::new(
                        from.clone(),
                        to.clone(),
                        m.distance(),
                        m.duration(),
                    )),
                    DistanceEntry::Failed(reason) => {
                        warn!(%from, %to, %reason, "skipping unresolved distance entry");
                    }
                }
            }
        }
        records
    }

    /// Builds a cost graph from the table.
    pub fn to_graph(&self) -> Result<CostGraph, RouteError> {
        CostGraph::from_records(self.to_records())
    }

    /// Stores a resolved metric, replacing any previous entry.
    pub fn insert(
        &mut self,
        from: impl Into<LocationId>,
        to: impl Into<LocationId>,
        metric: EdgeMetric,
    ) {
        self.distances
            .entry(from.into())
            .or_default()
            .insert(to.into(), DistanceEntry::Metric(metric));
    }

    /// Overlays `fresh` onto this table; entries in `fresh` win.
    pub fn merge(&mut self, fresh: DistanceTable) {
        for (from, targets) in fresh.distances {
            self.distances.entry(from).or_default().extend(targets);
        }
    }
}
