//! # waypoint-router
//!
//! Exact route planning between a fixed start and end through a set of
//! mandatory stops, minimizing a weighted sum of distance and duration over
//! a precomputed pairwise distance/duration table.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (EdgeMetric, Weights, Solution, Location)
//! - [`graph`] — Pair-keyed cost graph with reachability checks
//! - [`evaluation`] — Path scoring by graph lookup or dense matrix
//! - [`solver`] — Reference and accelerated exhaustive solvers, backend selection
//! - [`config`] — JSON route configs, distance tables and solve reports
//! - [`session`] — Explicit planner session state for interactive front ends
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use waypoint_router::graph::CostGraph;
//! use waypoint_router::models::{EdgeRecord, Weights};
//! use waypoint_router::solver::{select_solver, Backend};
//!
//! let solver = select_solver(Backend::Auto);
//!
//! let mut records = Vec::new();
//! for (a, b, d, t) in [("A", "B", 1.0, 2.0), ("B", "C", 1.0, 2.0), ("A", "C", 5.0, 5.0)] {
//!     records.push(EdgeRecord::new(a, b, d, t));
//!     records.push(EdgeRecord::new(b, a, d, t));
//! }
//! let graph = CostGraph::from_records(records).unwrap();
//!
//! let sol = solver.solve(&graph, "A", "C", &["B"], Weights::new(1.0, 0.0).unwrap()).unwrap();
//! assert_eq!(sol.path(), ["A", "B", "C"]);
//! assert_eq!(sol.total_distance(), 2.0);
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;
pub mod session;
pub mod solver;
