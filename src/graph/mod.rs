//! Cost graph over named locations.
//!
//! Stores a distance/duration metric per ordered location pair.

mod cost_graph;

pub use cost_graph::CostGraph;
