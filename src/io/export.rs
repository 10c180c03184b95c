//! Write the markdown document and the JSON export.
//!
//! The JSON export is meant to be easy to consume in downstream scripts.

use std::fs::{self, File};
use std::path::Path;

use serde::Serialize;

use crate::domain::{AssignmentCollection, AssignmentRecord, RescaledBand};
use crate::error::AppError;

/// JSON export schema.
#[derive(Debug, Serialize)]
pub struct SyllabusExport<'a> {
    pub tool: &'static str,
    pub total_points: f64,
    pub assignments: &'a [AssignmentRecord],
    pub grade_scale: &'a [RescaledBand],
}

/// Write the markdown document.
pub fn write_markdown(path: &Path, markdown: &str) -> Result<(), AppError> {
    fs::write(path, markdown).map_err(|e| {
        AppError::input(format!("Failed to write markdown '{}': {e}", path.display()))
    })?;
    tracing::info!(path = %path.display(), bytes = markdown.len(), "wrote markdown");
    Ok(())
}

/// Write assignments and rescaled bands as pretty JSON.
pub fn write_run_json(
    path: &Path,
    assignments: &AssignmentCollection,
    bands: &[RescaledBand],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!("Failed to create JSON export '{}': {e}", path.display()))
    })?;

    let export = SyllabusExport {
        tool: "syllabuster",
        total_points: assignments.total_points(),
        assignments: assignments.records(),
        grade_scale: bands,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::input(format!("Failed to write JSON export: {e}")))?;
    tracing::info!(path = %path.display(), "wrote JSON export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::parse_assignments;
    use crate::domain::GradeBand;
    use crate::scale::rescale;

    #[test]
    fn json_export_has_records_and_bands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");

        let c = parse_assignments(["400 x 2 major projects (projects)", "200 final"]);
        let scale = [GradeBand::new("A", 90.0), GradeBand::new("B", 80.0)];
        let bands = rescale(&scale, c.total_points());
        write_run_json(&path, &c, &bands).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tool"], "syllabuster");
        assert_eq!(value["total_points"], 1000.0);
        assert_eq!(value["assignments"][0]["display_weight"], "400 x 2");
        assert_eq!(value["assignments"][0]["short_label"], "projects");
        assert_eq!(value["grade_scale"][1]["letter"], "B");
        assert_eq!(value["grade_scale"][1]["low_points"], 800.0);
        assert_eq!(value["grade_scale"][1]["high_points"], 900.0);
    }

    #[test]
    fn markdown_write_failure_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_markdown(&dir.path().join("missing").join("out.md"), "x").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}
