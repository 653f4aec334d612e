//! Planner session state.
//!
//! Holds what an interactive front end collects before a solve: named
//! locations, the chosen start and end, the required-stop selection and the
//! weights. Every action borrows the current session and returns an updated
//! copy, so a rejected action leaves the caller's session untouched and no
//! state lives outside the value being passed around.

use std::collections::HashSet;

use crate::config::{LocationsFile, RouteConfig};
use crate::error::SessionError;
use crate::models::{Location, LocationId, Weights};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Parses `"latitude, longitude"` into a coordinate pair.
///
/// # Examples
///
/// ```
/// use waypoint_router::session::parse_coordinates;
///
/// assert_eq!(parse_coordinates("52.37, 4.89").unwrap(), (52.37, 4.89));
/// assert!(parse_coordinates("52.37").is_err());
/// ```
pub fn parse_coordinates(input: &str) -> Result<(f64, f64), SessionError> {
    let invalid = || SessionError::InvalidCoordinates(input.to_string());
    let mut parts = input.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }
    Ok((lat, lon))
}

/// Explicit state of one planning session.
///
/// # Examples
///
/// ```
/// use waypoint_router::session::PlannerSession;
///
/// let session = PlannerSession::new()
///     .add_location("Home", 52.37, 4.89).unwrap()
///     .add_location("Shop", 52.36, 4.90).unwrap()
///     .add_location("Work", 52.35, 4.91).unwrap()
///     .select_start("Home").unwrap()
///     .select_end("Work").unwrap()
///     .toggle_required_stop("Shop").unwrap()
///     .set_weights(0.7, 0.3).unwrap();
///
/// let config = session.to_config().unwrap();
/// assert_eq!(config.start_location, "Home");
/// assert_eq!(config.required_stops, vec!["Shop".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerSession {
    locations: Vec<Location>,
    start: Option<LocationId>,
    end: Option<LocationId>,
    required: HashSet<LocationId>,
    weights: Weights,
}

impl PlannerSession {
    /// Empty session with equal weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-filled from a saved location list.
    pub fn from_locations(file: LocationsFile) -> Result<Self, SessionError> {
        let mut session = Self::new();
        for loc in &file.locations {
            let (lat, lon) = (loc.latitude(), loc.longitude());
            session = session.add_location(loc.name(), lat, lon)?;
        }
        Ok(session)
    }

    /// Location list for saving.
    pub fn locations_file(&self) -> LocationsFile {
        LocationsFile {
            locations: self.locations.clone(),
        }
    }

    /// Adds a named location. Names must be non-empty and unique.
    pub fn add_location(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyName);
        }
        if self.contains(name) {
            return Err(SessionError::DuplicateLocation(name.to_string()));
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(SessionError::InvalidCoordinates(format!(
                "{latitude}, {longitude}"
            )));
        }
        let mut next = self.clone();
        let location = Location::new(name, latitude, longitude);
        next.locations.push(location);
        Ok(next)
    }

    /// Sets the weights. Each must lie in `[0, 1]` and together sum to 1.
    pub fn set_weights(&self, distance: f64, duration: f64) -> Result<Self, SessionError> {
        if !(0.0..=1.0).contains(&distance) || !(0.0..=1.0).contains(&duration) {
            return Err(SessionError::InvalidWeights(
                "each weight must be between 0 and 1".to_string(),
            ));
        }
        if ((distance + duration) - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SessionError::InvalidWeights(
                "the weights must sum up to 1".to_string(),
            ));
        }
        let weights = Weights::new(distance, duration)
            .map_err(|e| SessionError::InvalidWeights(e.to_string()))?;
        let mut next = self.clone();
        next.weights = weights;
        Ok(next)
    }

    /// Chooses the start location and drops it from the required stops.
    pub fn select_start(&self, name: &str) -> Result<Self, SessionError> {
        self.require_known(name)?;
        let mut next = self.clone();
        next.required.remove(name);
        next.start = Some(name.to_string());
        Ok(next)
    }

    /// Chooses the end location and drops it from the required stops.
    pub fn select_end(&self, name: &str) -> Result<Self, SessionError> {
        self.require_known(name)?;
        let mut next = self.clone();
        next.required.remove(name);
        next.end = Some(name.to_string());
        Ok(next)
    }

    /// Adds `name` to the required stops, or removes it if already there.
    pub fn toggle_required_stop(&self, name: &str) -> Result<Self, SessionError> {
        self.require_known(name)?;
        if self.start.as_deref() == Some(name) || self.end.as_deref() == Some(name) {
            return Err(SessionError::EndpointAsStop(name.to_string()));
        }
        let mut next = self.clone();
        if !next.required.remove(name) {
            next.required.insert(name.to_string());
        }
        Ok(next)
    }

    /// Builds the route request. Requires both endpoints to be selected.
    pub fn to_config(&self) -> Result<RouteConfig, SessionError> {
        let start = self
            .start
            .clone()
            .ok_or(SessionError::EndpointNotSet("start"))?;
        let end = self.end.clone().ok_or(SessionError::EndpointNotSet("end"))?;
        Ok(RouteConfig {
            start_location: start,
            end_location: end,
            required_stops: self.required_stops(),
            weights: self.weights,
        })
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Selected start location.
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// Selected end location.
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Required stops in location insertion order.
    pub fn required_stops(&self) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|l| self.required.contains(l.name()))
            .map(|l| l.name().to_string())
            .collect()
    }

    /// Current weights.
    pub fn weights(&self) -> Weights {
        self.weights
    }

    fn contains(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l.name() == name)
    }

    fn require_known(&self, name: &str) -> Result<(), SessionError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(SessionError::UnknownLocation(name.to_string()))
        }
    }
}
