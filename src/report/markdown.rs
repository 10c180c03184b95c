//! Markdown rendering.
//!
//! Rendering is lossy: the tables show `display_weight` and the long name
//! only, so feeding a rendered table back through the parser does not give
//! the same collection.

use std::fmt::Write;

use crate::domain::{AssignmentCollection, RescaledBand};

/// Two-column table of point expressions and category names.
pub fn assignments_table(assignments: &AssignmentCollection) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("| Points  | Category            |\n");
    out.push_str("| ------- | ------------------- |\n");
    for r in assignments.records() {
        let _ = writeln!(out, "| {} | {} |", r.display_weight(), r.name());
    }
    out
}

/// Letter / low / high table.
///
/// The first band reads `≥ low` and `≤ total`; every other band reads
/// `≥ low` and `< high`.
pub fn scale_table(bands: &[RescaledBand]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("| Letter | Low | High |\n");
    out.push_str("| :----- | :-- | :--- |\n");
    for (i, band) in bands.iter().enumerate() {
        let ceiling = if i == 0 { "≤" } else { "<" };
        let _ = writeln!(
            out,
            "| {} | ≥ {:.0} | {ceiling} {:.0} |",
            band.letter, band.low_points, band.high_points
        );
    }
    out
}

/// Standalone scale listing, as printed by `syllabuster scale`.
pub fn scale_section(bands: &[RescaledBand]) -> String {
    format!("\n# Letter Grade Scale\n{}", scale_table(bands))
}

/// Full syllabus grading section.
///
/// An empty `late_policy` drops the policy line.
pub fn syllabus_document(
    assignments: &AssignmentCollection,
    bands: &[RescaledBand],
    late_policy: &str,
) -> String {
    let mut out = String::new();
    out.push_str("\n### Grade Distribution\n\n");
    let _ = writeln!(
        out,
        "There are {:.0} possible points to be earned throughout the semester.",
        assignments.total_points()
    );
    let policy = late_policy.trim();
    if !policy.is_empty() {
        let _ = writeln!(out, "*{policy}*");
    }
    out.push('\n');
    out.push_str(&assignments_table(assignments));
    out.push_str("\n### Letter Grade Key\n");
    out.push_str(&scale_table(bands));
    out
}
