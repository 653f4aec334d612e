//! Route request configuration.

use serde::{Deserialize, Serialize};

use crate::models::{LocationId, Weights};

/// Start, end, required stops and weights of one planning request.
///
/// ```json
/// {
///   "start_location": "Depot",
///   "end_location": "Office",
///   "required_stops": ["Bakery", "Post"],
///   "weights": { "distance_km": 0.5, "duration_min": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub start_location: LocationId,
    pub end_location: LocationId,
    #[serde(default)]
    pub required_stops: Vec<LocationId>,
    #[serde(default)]
    pub weights: Weights,
}

impl RouteConfig {
    /// Required stops as borrowed names, in configured order.
    pub fn stops(&self) -> Vec<&str> {
        self.required_stops.iter().map(String::as_str).collect()
    }
}
