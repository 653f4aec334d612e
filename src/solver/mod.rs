//! Exact route solvers.
//!
//! - [`ReferenceSolver`] — single-threaded enumeration with graph lookups
//! - [`AcceleratedSolver`] — sharded parallel enumeration over a dense matrix
//!   (requires the `parallel` feature)
//!
//! Both implement [`RouteSolver`] with identical preconditions, output and
//! tie-break: orderings of the required stops are visited in lexicographic
//! order of their input positions and the first strictly cheapest one wins.
//! Use [`select_solver`] to pick a backend once at startup.

#[cfg(feature = "parallel")]
mod accelerated;
mod permutation;
mod reference;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::RouteError;
use crate::graph::CostGraph;
use crate::models::{Solution, Weights};

#[cfg(feature = "parallel")]
pub use accelerated::AcceleratedSolver;
pub use permutation::{next_permutation, Permutations};
pub use reference::ReferenceSolver;

/// A fixed-endpoint route solver.
///
/// Finds the minimum-cost ordering of `required_stops` between `start` and
/// `end`. Implementations must:
///
/// - reject `start == end`, start/end listed as stops, or duplicate stops
///   with [`RouteError::InvalidInput`] before any enumeration;
/// - check that every ordered pair of `{start, end} ∪ required_stops` has a
///   metric, failing with [`RouteError::MissingEdge`] otherwise;
/// - return the first strictly cheapest ordering in lexicographic order of
///   input positions.
pub trait RouteSolver: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Solves one request.
    fn solve(
        &self,
        graph: &CostGraph,
        start: &str,
        end: &str,
        required_stops: &[&str],
        weights: Weights,
    ) -> Result<Solution, RouteError>;
}

/// Solves one request with the [`ReferenceSolver`].
pub fn solve(
    graph: &CostGraph,
    start: &str,
    end: &str,
    required_stops: &[&str],
    weights: Weights,
) -> Result<Solution, RouteError> {
    ReferenceSolver.solve(graph, start, end, required_stops, weights)
}

/// Checks the call preconditions shared by every solver.
///
/// # Examples
///
/// ```
/// use waypoint_router::solver::validate_input;
///
/// assert!(validate_input("A", "C", &["B"]).is_ok());
/// assert!(validate_input("A", "A", &[]).is_err());
/// assert!(validate_input("A", "C", &["B", "B"]).is_err());
/// ```
pub fn validate_input(start: &str, end: &str, required_stops: &[&str]) -> Result<(), RouteError> {
    if start == end {
        return Err(RouteError::InvalidInput(format!(
            "start and end must differ, both are '{start}'"
        )));
    }
    let mut seen = HashSet::with_capacity(required_stops.len());
    for &stop in required_stops {
        if stop == start || stop == end {
            return Err(RouteError::InvalidInput(format!(
                "'{stop}' is the start or end location and cannot be a required stop"
            )));
        }
        if !seen.insert(stop) {
            return Err(RouteError::InvalidInput(format!(
                "required stop '{stop}' is listed more than once"
            )));
        }
    }
    Ok(())
}

/// Locations of a request in path-node order: start, stops, end.
pub(crate) fn candidate_locations<'a>(
    start: &'a str,
    end: &'a str,
    required_stops: &[&'a str],
) -> Vec<&'a str> {
    let mut locations = Vec::with_capacity(required_stops.len() + 2);
    locations.push(start);
    locations.extend_from_slice(required_stops);
    locations.push(end);
    locations
}

/// Solver backend choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Accelerated when available, otherwise reference.
    #[default]
    Auto,
    /// Always the reference solver.
    Reference,
    /// The accelerated solver, falling back to reference when unavailable.
    Accelerated,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Backend::Auto => "auto",
            Backend::Reference => "reference",
            Backend::Accelerated => "accelerated",
        };
        f.write_str(s)
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "reference" => Ok(Backend::Reference),
            "accelerated" => Ok(Backend::Accelerated),
            other => Err(format!(
                "unknown backend '{other}', expected auto, reference or accelerated"
            )),
        }
    }
}

/// Returns `true` if this build includes the accelerated solver.
pub fn accelerated_available() -> bool {
    cfg!(feature = "parallel")
}

/// Picks a solver for the given backend choice.
///
/// Call once before reading any location data; an unavailable accelerated
/// backend silently falls back to [`ReferenceSolver`].
///
/// # Examples
///
/// ```
/// use waypoint_router::solver::{select_solver, Backend};
///
/// assert_eq!(select_solver(Backend::Reference).name(), "reference");
/// let auto = select_solver(Backend::Auto);
/// assert!(auto.name() == "accelerated" || auto.name() == "reference");
/// ```
pub fn select_solver(backend: Backend) -> Box<dyn RouteSolver> {
    let solver: Box<dyn RouteSolver> = match backend {
        Backend::Reference => Box::new(ReferenceSolver),
        Backend::Auto | Backend::Accelerated => accelerated_or_reference(),
    };
    debug!(requested = %backend, selected = solver.name(), "solver backend selected");
    solver
}

#[cfg(feature = "parallel")]
fn accelerated_or_reference() -> Box<dyn RouteSolver> {
    Box::new(AcceleratedSolver)
}

#[cfg(not(feature = "parallel"))]
fn accelerated_or_reference() -> Box<dyn RouteSolver> {
    debug!("accelerated solver not built, using reference");
    Box::new(ReferenceSolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EdgeRecord;
    use proptest::prelude::*;

    #[test]
    fn test_validate_input_errors() {
        assert!(matches!(
            validate_input("A", "A", &["B"]),
            Err(RouteError::InvalidInput(_))
        ));
        assert!(validate_input("A", "B", &["A"]).is_err());
        assert!(validate_input("A", "B", &["B"]).is_err());
        assert!(validate_input("A", "B", &["C", "D", "C"]).is_err());
        assert!(validate_input("A", "B", &[]).is_ok());
    }

    #[test]
    fn test_invalid_input_before_graph_checks() {
        // Empty graph: only precondition errors can be reported first.
        let g = CostGraph::new();
        let err = ReferenceSolver
            .solve(&g, "A", "B", &["A"], Weights::default())
            .expect_err("start listed as stop");
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_candidate_locations_order() {
        assert_eq!(
            candidate_locations("S", "E", &["x", "y"]),
            vec!["S", "x", "y", "E"]
        );
    }

    #[test]
    fn test_backend_parse_and_display() {
        for b in [Backend::Auto, Backend::Reference, Backend::Accelerated] {
            assert_eq!(b.to_string().parse::<Backend>(), Ok(b));
        }
        assert_eq!("Reference".parse::<Backend>(), Ok(Backend::Reference));
        assert!("gpu".parse::<Backend>().is_err());
    }

    #[test]
    fn test_select_solver() {
        assert_eq!(select_solver(Backend::Reference).name(), "reference");
        let expected = if accelerated_available() {
            "accelerated"
        } else {
            "reference"
        };
        assert_eq!(select_solver(Backend::Auto).name(), expected);
        assert_eq!(select_solver(Backend::Accelerated).name(), expected);
    }

    const NAMES: [&str; 8] = ["L0", "L1", "L2", "L3", "L4", "L5", "L6", "L7"];

    /// Complete graph over `NAMES` from a flat list of (distance, duration).
    fn complete_graph(metrics: &[(f64, f64)]) -> CostGraph {
        let mut records = Vec::new();
        let mut k = 0;
        for from in NAMES {
            for to in NAMES {
                if from != to {
                    let (d, t) = metrics[k % metrics.len()];
                    records.push(EdgeRecord::new(from, to, d, t));
                    k += 1;
                }
            }
        }
        CostGraph::from_records(records).expect("valid records")
    }

    fn request() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>, f64, f64)> {
        (
            prop::collection::vec((0.0..50.0f64, 0.0..90.0f64), 56),
            Just((2..NAMES.len()).collect::<Vec<_>>()).prop_shuffle(),
            0.0..1.0f64,
            0.0..1.0f64,
        )
            .prop_flat_map(|(metrics, shuffled, wd, wt)| {
                (0..=5usize).prop_map(move |k| {
                    (metrics.clone(), shuffled[..k].to_vec(), wd, wt)
                })
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_solution_invariants((metrics, stop_idx, wd, wt) in request()) {
            let g = complete_graph(&metrics);
            let stops: Vec<&str> = stop_idx.iter().map(|&i| NAMES[i]).collect();
            let w = Weights::new(wd, wt).expect("valid");
            let sol = ReferenceSolver.solve(&g, "L0", "L1", &stops, w).expect("complete graph");

            prop_assert_eq!(sol.start(), Some("L0"));
            prop_assert_eq!(sol.end(), Some("L1"));
            let mut interior: Vec<&str> = sol.stops().iter().map(String::as_str).collect();
            let mut expected = stops.clone();
            interior.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(interior, expected);

            let combined = wd * sol.total_distance() + wt * sol.total_duration();
            prop_assert!((sol.total_cost() - combined).abs() < 1e-6);

            let again = ReferenceSolver.solve(&g, "L0", "L1", &stops, w).expect("complete graph");
            prop_assert_eq!(&sol, &again);
        }

        #[test]
        fn prop_no_ordering_is_cheaper((metrics, stop_idx, wd, wt) in request()) {
            let g = complete_graph(&metrics);
            let stops: Vec<&str> = stop_idx.iter().map(|&i| NAMES[i]).collect();
            let w = Weights::new(wd, wt).expect("valid");
            let sol = ReferenceSolver.solve(&g, "L0", "L1", &stops, w).expect("complete graph");

            let eval = crate::evaluation::PathEvaluator::new(&g, w);
            for order in Permutations::new(stops.len()) {
                let mut path = vec!["L0"];
                path.extend(order.iter().map(|&i| stops[i]));
                path.push("L1");
                let cost = eval.evaluate(&path).expect("complete graph").cost;
                prop_assert!(sol.total_cost() <= cost);
            }
        }

        #[cfg(feature = "parallel")]
        #[test]
        fn prop_backends_agree((metrics, stop_idx, wd, wt) in request()) {
            let g = complete_graph(&metrics);
            let stops: Vec<&str> = stop_idx.iter().map(|&i| NAMES[i]).collect();
            let w = Weights::new(wd, wt).expect("valid");
            let slow = ReferenceSolver.solve(&g, "L0", "L1", &stops, w).expect("complete graph");
            let fast = AcceleratedSolver.solve(&g, "L0", "L1", &stops, w).expect("complete graph");
            prop_assert_eq!(slow.path(), fast.path());
            prop_assert_eq!(slow.total_cost().to_bits(), fast.total_cost().to_bits());
            prop_assert_eq!(slow.total_distance().to_bits(), fast.total_distance().to_bits());
            prop_assert_eq!(slow.total_duration().to_bits(), fast.total_duration().to_bits());
        }
    }
}
