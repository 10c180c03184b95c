//! YAML configuration.
//!
//! ```yaml
//! scale:
//!   - Letter: A
//!     Min: 93
//!   - Letter: B
//!     Min: 85
//! assignments:
//!   - 400 x 2 major projects (projects)
//! output:
//!   markdown: output.md
//!   chart: chart.svg
//! late_policy: Late submissions earn no points.
//! ```
//!
//! Only `scale` is required, and it must list at least one band.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::GradeScale;
use crate::error::AppError;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_MARKDOWN_PATH: &str = "output.md";
pub const DEFAULT_CHART_PATH: &str = "chart.svg";
pub const DEFAULT_LATE_POLICY: &str = "Late submissions earn no points.";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scale: GradeScale,
    /// Default assignment lines (prefill for the editor, fallback for `generate`).
    #[serde(default)]
    pub assignments: Vec<String>,
    #[serde(default)]
    pub output: OutputPaths,
    #[serde(default = "default_late_policy")]
    pub late_policy: String,
}

/// Where generated files are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub markdown: PathBuf,
    pub chart: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            markdown: PathBuf::from(DEFAULT_MARKDOWN_PATH),
            chart: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}

fn default_late_policy() -> String {
    DEFAULT_LATE_POLICY.to_string()
}

/// Read and validate a config file.
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("error loading config '{}': {e}", path.display())))?;
    let config = parse_config(&text)
        .map_err(|e| AppError::input(format!("{}: {}", path.display(), e.message())))?;

    tracing::debug!(
        path = %path.display(),
        bands = config.scale.bands().len(),
        assignments = config.assignments.len(),
        "config loaded"
    );
    Ok(config)
}

/// Parse config YAML from a string.
pub fn parse_config(text: &str) -> Result<Config, AppError> {
    let config: Config = serde_yaml::from_str(text)
        .map_err(|e| AppError::input(format!("error unmarshaling config: {e}")))?;

    if !config.scale.is_descending() {
        tracing::warn!("grade scale is not ordered highest threshold first; bands will overlap");
    }
    Ok(config)
}
