//! Shared "generate" pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! lines -> assignments + total -> rescaled scale -> markdown + chart files
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::assignment::parse_assignments;
use crate::config::OutputPaths;
use crate::domain::{AssignmentCollection, GradeScale, RescaledBand};
use crate::error::AppError;
use crate::scale::rescale;

/// All computed outputs of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub assignments: AssignmentCollection,
    pub bands: Vec<RescaledBand>,
}

impl RunOutput {
    pub fn markdown(&self, late_policy: &str) -> String {
        crate::report::syllabus_document(&self.assignments, &self.bands, late_policy)
    }

    pub fn chart_values(&self) -> Vec<(String, f64)> {
        crate::report::chart_values(&self.assignments)
    }
}

/// Parse `lines` and rescale `scale` to their point total.
pub fn run<I, S>(lines: I, scale: &GradeScale) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let assignments = parse_assignments(&lines);
    let bands = rescale(scale.bands(), assignments.total_points());

    let non_blank = lines.iter().filter(|l| !l.as_ref().trim().is_empty()).count();
    tracing::debug!(
        records = assignments.len(),
        skipped = non_blank.saturating_sub(assignments.len()),
        total_points = assignments.total_points(),
        "parsed assignments"
    );

    RunOutput { assignments, bands }
}

/// Write the markdown (and, if `chart` is set, the SVG chart).
///
/// Returns the markdown for previewing. A run without any assignments is
/// rejected before anything is written. A zero-point run still gets its
/// markdown; the chart is skipped since there is nothing to draw.
pub fn write_outputs(
    run: &RunOutput,
    paths: &OutputPaths,
    late_policy: &str,
    chart: bool,
) -> Result<String, AppError> {
    if run.assignments.is_empty() {
        return Err(AppError::input("No valid assignment lines to generate from."));
    }

    let values = run.chart_values();
    let chart = chart && {
        let drawable = values.iter().any(|(_, v)| *v > 0.0);
        if !drawable {
            tracing::warn!(
                path = %paths.chart.display(),
                "all assignments are worth 0 points; skipping chart"
            );
        }
        drawable
    };

    let markdown = run.markdown(late_policy);
    crate::io::write_markdown(&paths.markdown, &markdown)?;
    if chart {
        crate::io::write_pie_chart(&paths.chart, &values)?;
    }
    Ok(markdown)
}
