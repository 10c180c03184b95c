//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - built in-memory by the parser and rescaler
//! - rendered to markdown and charts
//! - exported to JSON

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One parsed assignment line.
///
/// `points` is the resolved weight (base × multiplier), while
/// `display_weight` keeps the expression the instructor typed (e.g. `"400 x 2"`)
/// so tables can show it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRecord {
    points: f64,
    display_weight: String,
    name: String,
    short_label: String,
}

impl AssignmentRecord {
    pub fn new(
        points: f64,
        display_weight: impl Into<String>,
        name: impl Into<String>,
        short_label: impl Into<String>,
    ) -> Self {
        Self {
            points,
            display_weight: display_weight.into(),
            name: name.into(),
            short_label: short_label.into(),
        }
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn display_weight(&self) -> &str {
        &self.display_weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compact label for chart legends; equals `name` when the line had no
    /// trailing `(short)` suffix.
    pub fn short_label(&self) -> &str {
        &self.short_label
    }
}

/// Ordered assignment records plus their point total.
///
/// The total is accumulated while the collection is built and there is no
/// way to change either side afterwards, so `total_points` always equals the
/// sum of the member `points`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentCollection {
    records: Vec<AssignmentRecord>,
    total_points: f64,
}

impl AssignmentCollection {
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn total_points(&self) -> f64 {
        self.total_points
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AssignmentRecord> for AssignmentCollection {
    fn from_iter<I: IntoIterator<Item = AssignmentRecord>>(iter: I) -> Self {
        let mut records = Vec::new();
        let mut total_points = 0.0;
        for record in iter {
            total_points += record.points;
            records.push(record);
        }
        Self {
            records,
            total_points,
        }
    }
}

/// A configured letter grade and its minimum, as a percent of total points.
///
/// Config files use the `Letter` / `Min` keys; lowercase spellings are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    #[serde(rename(serialize = "letter", deserialize = "Letter"), alias = "letter")]
    pub letter: String,
    #[serde(
        rename(serialize = "threshold_percent", deserialize = "Min"),
        alias = "min"
    )]
    pub threshold_percent: f64,
}

impl GradeBand {
    pub fn new(letter: impl Into<String>, threshold_percent: f64) -> Self {
        Self {
            letter: letter.into(),
            threshold_percent,
        }
    }
}

/// A non-empty grade scale, highest threshold first.
///
/// Ordering is the caller's responsibility and is not checked here; only
/// emptiness is rejected, so a run never falls back to a guessed scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<GradeBand>")]
pub struct GradeScale {
    bands: Vec<GradeBand>,
}

impl GradeScale {
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Whether thresholds are non-increasing from first to last.
    pub fn is_descending(&self) -> bool {
        self.bands
            .windows(2)
            .all(|w| w[0].threshold_percent >= w[1].threshold_percent)
    }
}

impl TryFrom<Vec<GradeBand>> for GradeScale {
    type Error = AppError;

    fn try_from(bands: Vec<GradeBand>) -> Result<Self, Self::Error> {
        if bands.is_empty() {
            return Err(AppError::input(
                "no scale defined (check configuration file)",
            ));
        }
        Ok(Self { bands })
    }
}

/// A grade band expressed in absolute points.
///
/// `high_points` is an inclusive ceiling for the first (highest) band and an
/// exclusive one for every other band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RescaledBand {
    pub letter: String,
    pub low_points: f64,
    pub high_points: f64,
}
