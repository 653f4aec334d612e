//! Configuration, distance tables and solution output files.
//!
//! All files are JSON. The solver core never touches the filesystem; these
//! helpers sit between it and the command-line front end.

mod distances;
mod route;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use distances::{DistanceEntry, DistanceTable};
pub use route::RouteConfig;

use crate::error::ConfigError;
use crate::graph::CostGraph;
use crate::models::{Location, Solution};
use crate::session::PlannerSession;

/// Largest difference between the two directions of a pair that still
/// counts as symmetric in the load log.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A solution plus the wall-clock time spent solving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    #[serde(flatten)]
    pub solution: Solution,
    pub solving_time_seconds: f64,
}

/// The saved location list: `{ "locations": [{ "name", "coords" }, ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsFile {
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Reads and parses a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as pretty JSON into `path`.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a route request.
pub fn load_config(path: &Path) -> Result<RouteConfig, ConfigError> {
    let config: RouteConfig = load_json(path)?;
    debug!(
        path = %path.display(),
        stops = config.required_stops.len(),
        "loaded route config"
    );
    Ok(config)
}

/// Loads a distance table and builds its cost graph.
pub fn load_distances(path: &Path) -> Result<CostGraph, ConfigError> {
    let table: DistanceTable = load_json(path)?;
    let graph = table.to_graph()?;
    debug!(
        path = %path.display(),
        edges = graph.num_edges(),
        symmetric = graph.is_symmetric(SYMMETRY_TOLERANCE),
        "loaded distance table"
    );
    Ok(graph)
}

/// Loads a saved location list into a fresh planner session.
///
/// Duplicate or unnamed entries reject the whole file.
pub fn load_session(path: &Path) -> Result<PlannerSession, ConfigError> {
    let file: LocationsFile = load_json(path)?;
    let session = PlannerSession::from_locations(file)?;
    debug!(
        path = %path.display(),
        locations = session.locations().len(),
        "loaded planner session"
    );
    Ok(session)
}

/// Saves the session's location list.
pub fn save_session(path: &Path, session: &PlannerSession) -> Result<(), ConfigError> {
    save_json(path, &session.locations_file())
}

/// Writes a solve report.
pub fn write_report(path: &Path, report: &SolveReport) -> Result<(), ConfigError> {
    save_json(path, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_temp(
            r#"{"start_location": "A", "end_location": "C", "required_stops": ["B"],
                "weights": {"distance_km": 1.0, "duration_min": 0.0}}"#,
        );
        let cfg = load_config(file.path()).expect("loads");
        assert_eq!(cfg.stops(), vec!["B"]);
    }

    #[test]
    fn test_load_distances() {
        let file = write_temp(
            r#"{"distances": {
                "A": {"B": {"distance_km": 1.0, "duration_min": 2.0}},
                "B": {"A": {"distance_km": 1.0, "duration_min": 2.0}}
            }}"#,
        );
        let g = load_distances(file.path()).expect("loads");
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_load_distances_rejects_negative_metric() {
        let file = write_temp(
            r#"{"distances": {
                "A": {"B": {"distance_km": -10.0, "duration_min": -3.0}},
                "B": {"A": {"distance_km": -10.0, "duration_min": -3.0}}
            }}"#,
        );
        let err = load_distances(file.path()).expect_err("negative metric");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_config_rejects_negative_weight() {
        let file = write_temp(
            r#"{"start_location": "A", "end_location": "C",
                "weights": {"distance_km": -1.0, "duration_min": 1.0}}"#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_config(&dir.path().join("absent.json")).expect_err("no file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_temp("{ not json");
        let err = load_distances(file.path()).expect_err("bad json");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_report_keys_and_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("route_output.json");
        let report = SolveReport {
            solution: Solution::new(vec!["A".into(), "B".into(), "C".into()], 2.0, 2.0, 4.0),
            solving_time_seconds: 0.125,
        };
        write_report(&path, &report).expect("writes");

        let value: serde_json::Value = load_json(&path).expect("reads");
        assert_eq!(value["shortest_path"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(value["total_cost"], 2.0);
        assert_eq!(value["total_distance_km"], 2.0);
        assert_eq!(value["total_duration_min"], 4.0);
        assert_eq!(value["solving_time_seconds"], 0.125);

        let back: SolveReport = load_json(&path).expect("reads");
        assert_eq!(back, report);
    }

    #[test]
    fn test_locations_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("locations.json");
        let file = LocationsFile {
            locations: vec![Location::new("A", 1.0, 2.0)],
        };
        save_json(&path, &file).expect("writes");
        let back: LocationsFile = load_json(&path).expect("reads");
        assert_eq!(back, file);
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("locations.json");
        let session = PlannerSession::new()
            .add_location("Home", 52.37, 4.89)
            .expect("added")
            .add_location("Work", 52.35, 4.91)
            .expect("added");
        save_session(&path, &session).expect("writes");

        let back = load_session(&path).expect("reads");
        assert_eq!(back.locations(), session.locations());
        assert_eq!(back.start(), None);
    }

    #[test]
    fn test_session_duplicate_rejected() {
        let file = write_temp(
            r#"{"locations": [{"name": "A", "coords": [1.0, 2.0]}, {"name": "A", "coords": [3.0, 4.0]}]}"#,
        );
        let err = load_session(file.path()).expect_err("duplicate name");
        assert!(matches!(
            err,
            ConfigError::Session(crate::error::SessionError::DuplicateLocation(_))
        ));
    }
}
