//! Reporting utilities: markdown tables, the syllabus document, and chart values.
//!
//! Formatting lives here so the parser and rescaler stay free of presentation
//! concerns, and so output changes stay localized.

pub mod markdown;

pub use markdown::*;

use crate::domain::AssignmentCollection;

/// `(short label, points)` pairs, one per assignment, in input order.
pub fn chart_values(assignments: &AssignmentCollection) -> Vec<(String, f64)> {
    assignments
        .records()
        .iter()
        .map(|r| (r.short_label().to_string(), r.points()))
        .collect()
}
