//! Path scoring.
//!
//! - [`PathEvaluator`] — scores a named path by graph lookups
//! - [`MetricMatrix`] — dense index-based table for tight enumeration loops

mod matrix;
mod path;

pub use matrix::MetricMatrix;
pub use path::{PathEvaluator, PathTotals};
