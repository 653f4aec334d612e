//! Solved route type.

use serde::{Deserialize, Serialize};

use super::LocationId;

/// The minimum-cost path found by a solver together with its totals.
///
/// Serializes with the keys `shortest_path`, `total_cost`,
/// `total_distance_km` and `total_duration_min`.
///
/// # Examples
///
/// ```
/// use waypoint_router::models::Solution;
///
/// let sol = Solution::new(vec!["A".into(), "B".into(), "C".into()], 2.0, 2.0, 4.0);
/// assert_eq!(sol.start(), Some("A"));
/// assert_eq!(sol.end(), Some("C"));
/// assert_eq!(sol.stops(), ["B".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(rename = "shortest_path")]
    path: Vec<LocationId>,
    total_cost: f64,
    #[serde(rename = "total_distance_km")]
    total_distance: f64,
    #[serde(rename = "total_duration_min")]
    total_duration: f64,
}

impl Solution {
    /// Creates a solution from a full path and its totals.
    pub fn new(
        path: Vec<LocationId>,
        total_cost: f64,
        total_distance: f64,
        total_duration: f64,
    ) -> Self {
        Self {
            path,
            total_cost,
            total_distance,
            total_duration,
        }
    }

    /// Full path, start and end included.
    pub fn path(&self) -> &[LocationId] {
        &self.path
    }

    /// First location of the path.
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last location of the path.
    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Required stops in visiting order (path without start and end).
    pub fn stops(&self) -> &[LocationId] {
        if self.path.len() < 2 {
            return &[];
        }
        &self.path[1..self.path.len() - 1]
    }

    /// Weighted cost summed over every edge of the path.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Distance summed over every edge of the path.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Duration summed over every edge of the path.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }
}
