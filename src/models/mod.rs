//! Domain model types for waypoint routing.
//!
//! Provides the core value types: location identifiers, per-edge distance
//! and duration metrics, the weight vector that folds them into a scalar
//! cost, and the solved route returned to callers.

mod edge;
mod location;
mod solution;
mod weights;

pub use edge::{EdgeMetric, EdgeRecord};
pub use location::Location;
pub use solution::Solution;
pub use weights::Weights;

/// Opaque location identifier. Compared by exact string equality.
pub type LocationId = String;
