//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::LocationId;

/// Errors returned by graph construction and the route solvers.
///
/// A failed solve never produces a partial [`Solution`](crate::models::Solution).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The call itself is malformed: `start == end`, start or end listed as a
    /// required stop, duplicate required stops, or invalid weights/metrics.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The graph holds no metric for the ordered pair `(from, to)`.
    #[error("missing edge from '{from}' to '{to}'")]
    MissingEdge {
        /// Origin of the missing edge.
        from: LocationId,
        /// Destination of the missing edge.
        to: LocationId,
    },
}

impl RouteError {
    pub(crate) fn missing_edge(from: &str, to: &str) -> Self {
        Self::MissingEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Errors from reading route configuration, distance tables and writing
/// solutions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a file failed.
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A file was not valid JSON for the expected shape.
    #[error("cannot parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The file content was well-formed but semantically invalid.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// A planner session action was rejected.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Reasons a [`PlannerSession`](crate::session::PlannerSession) action is
/// rejected. The session passed in is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("location name must not be empty")]
    EmptyName,
    #[error("location '{0}' already exists")]
    DuplicateLocation(LocationId),
    #[error("unknown location '{0}'")]
    UnknownLocation(LocationId),
    #[error("invalid coordinates '{0}', expected 'latitude, longitude'")]
    InvalidCoordinates(String),
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
    #[error("'{0}' is the start or end location and cannot be a required stop")]
    EndpointAsStop(LocationId),
    #[error("{0} location is not selected")]
    EndpointNotSet(&'static str),
}
