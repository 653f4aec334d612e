//! Edge metrics and flat edge records.

use serde::{Deserialize, Serialize};

use super::LocationId;
use crate::error::RouteError;

/// Travel distance and duration for one ordered location pair.
///
/// Both values are finite and non-negative. Distances are kilometres and
/// durations minutes by convention; the solver itself is unit-agnostic.
///
/// # Examples
///
/// ```
/// use waypoint_router::models::EdgeMetric;
///
/// let m = EdgeMetric::new(12.5, 18.0).unwrap();
/// assert_eq!(m.distance(), 12.5);
/// assert_eq!(m.duration(), 18.0);
/// assert!(EdgeMetric::new(-1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEdgeMetric")]
pub struct EdgeMetric {
    #[serde(rename = "distance_km")]
    distance: f64,
    #[serde(rename = "duration_min")]
    duration: f64,
}

/// Unchecked wire form of [`EdgeMetric`].
#[derive(Deserialize)]
struct RawEdgeMetric {
    distance_km: f64,
    duration_min: f64,
}

impl TryFrom<RawEdgeMetric> for EdgeMetric {
    type Error = RouteError;

    fn try_from(raw: RawEdgeMetric) -> Result<Self, Self::Error> {
        Self::new(raw.distance_km, raw.duration_min)
    }
}

impl EdgeMetric {
    /// Creates a metric, rejecting negative or non-finite values.
    pub fn new(distance: f64, duration: f64) -> Result<Self, RouteError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(RouteError::InvalidInput(format!(
                "distance must be finite and non-negative, got {distance}"
            )));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(RouteError::InvalidInput(format!(
                "duration must be finite and non-negative, got {duration}"
            )));
        }
        Ok(Self { distance, duration })
    }

    /// Travel distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Travel duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// One `(from, to, distance, duration)` record as supplied by a distance
/// provider.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: LocationId,
    pub to: LocationId,
    pub distance: f64,
    pub duration: f64,
}

impl EdgeRecord {
    /// Creates a record.
    pub fn new(
        from: impl Into<LocationId>,
        to: impl Into<LocationId>,
        distance: f64,
        duration: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_accepts_zero() {
        let m = EdgeMetric::new(0.0, 0.0).expect("zero is valid");
        assert_eq!(m.distance(), 0.0);
        assert_eq!(m.duration(), 0.0);
    }

    #[test]
    fn test_metric_rejects_invalid() {
        assert!(EdgeMetric::new(f64::NAN, 1.0).is_err());
        assert!(EdgeMetric::new(1.0, f64::INFINITY).is_err());
        assert!(EdgeMetric::new(1.0, -0.5).is_err());
    }

    #[test]
    fn test_metric_serde_keys() {
        let m = EdgeMetric::new(3.0, 4.5).expect("valid");
        let json = serde_json::to_string(&m).expect("serialize");
        assert_eq!(json, r#"{"distance_km":3.0,"duration_min":4.5}"#);
        let back: EdgeMetric = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, m);
    }

    #[test]
    fn test_metric_deserialize_rejects_invalid() {
        for json in [
            r#"{"distance_km":-10.0,"duration_min":-3.0}"#,
            r#"{"distance_km":1.0,"duration_min":-0.5}"#,
            r#"{"distance_km":1e999,"duration_min":1.0}"#,
        ] {
            assert!(serde_json::from_str::<EdgeMetric>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn test_record_new() {
        let r = EdgeRecord::new("A", "B", 1.0, 2.0);
        assert_eq!(r.from, "A");
        assert_eq!(r.to, "B");
        assert_eq!(r.distance, 1.0);
        assert_eq!(r.duration, 2.0);
    }
}
