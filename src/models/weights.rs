//! Weight vector combining distance and duration into a scalar cost.

use serde::{Deserialize, Serialize};

use super::EdgeMetric;
use crate::error::RouteError;

/// Linear-combination coefficients for edge cost.
///
/// `cost(edge) = distance_weight * distance + duration_weight * duration`.
/// Both coefficients must be finite and non-negative; they are not required
/// to sum to 1.
///
/// # Examples
///
/// ```
/// use waypoint_router::models::{EdgeMetric, Weights};
///
/// let w = Weights::new(0.5, 0.5).unwrap();
/// let m = EdgeMetric::new(10.0, 20.0).unwrap();
/// assert_eq!(w.cost(&m), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct Weights {
    #[serde(rename = "distance_km")]
    distance: f64,
    #[serde(rename = "duration_min")]
    duration: f64,
}

#[derive(Deserialize)]
struct RawWeights {
    distance_km: f64,
    duration_min: f64,
}

impl TryFrom<RawWeights> for Weights {
    type Error = RouteError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.distance_km, raw.duration_min)
    }
}

impl Weights {
    /// Creates a weight vector, rejecting negative or non-finite coefficients.
    pub fn new(distance: f64, duration: f64) -> Result<Self, RouteError> {
        for (name, w) in [("distance", distance), ("duration", duration)] {
            if !w.is_finite() || w < 0.0 {
                return Err(RouteError::InvalidInput(format!(
                    "{name} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(Self { distance, duration })
    }

    /// Coefficient applied to distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Coefficient applied to duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Scalar cost of one edge.
    #[inline]
    pub fn cost(&self, metric: &EdgeMetric) -> f64 {
        self.distance * metric.distance() + self.duration * metric.duration()
    }
}

impl Default for Weights {
    /// Equal weighting of distance and duration.
    fn default() -> Self {
        Self {
            distance: 0.5,
            duration: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_linear_combination() {
        let w = Weights::new(2.0, 3.0).expect("valid");
        let m = EdgeMetric::new(1.5, 4.0).expect("valid");
        assert!((w.cost(&m) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_need_not_sum_to_one() {
        assert!(Weights::new(3.0, 7.0).is_ok());
        assert!(Weights::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_weights_reject_negative() {
        assert!(matches!(
            Weights::new(-0.1, 1.0),
            Err(RouteError::InvalidInput(_))
        ));
        assert!(Weights::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_default_is_even_split() {
        let w = Weights::default();
        assert_eq!(w.distance(), 0.5);
        assert_eq!(w.duration(), 0.5);
    }

    #[test]
    fn test_serde_keys() {
        let w: Weights =
            serde_json::from_str(r#"{"distance_km":1.0,"duration_min":0.0}"#).expect("parses");
        assert_eq!(w, Weights::new(1.0, 0.0).expect("valid"));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let err = serde_json::from_str::<Weights>(r#"{"distance_km":-1.0,"duration_min":0.5}"#)
            .expect_err("negative weight");
        assert!(err.to_string().contains("non-negative"));
    }
}
