//! Named locations with coordinates.

use serde::{Deserialize, Serialize};

use super::LocationId;

/// A named location with `[latitude, longitude]` coordinates.
///
/// The name is the identifier used throughout the cost graph; coordinates
/// are carried for the distance provider and map rendering only.
///
/// # Examples
///
/// ```
/// use waypoint_router::models::Location;
///
/// let loc = Location::new("Depot", 52.37, 4.89);
/// assert_eq!(loc.name(), "Depot");
/// assert_eq!(loc.latitude(), 52.37);
/// assert_eq!(loc.longitude(), 4.89);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: LocationId,
    coords: [f64; 2],
}

impl Location {
    /// Creates a location.
    pub fn new(name: impl Into<LocationId>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coords: [latitude, longitude],
        }
    }

    /// Location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coords[0]
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coords[1]
    }
}
