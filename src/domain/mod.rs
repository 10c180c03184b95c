//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - parsed assignment records and their collection (`AssignmentRecord`, `AssignmentCollection`)
//! - the configured percentage scale (`GradeBand`, `GradeScale`)
//! - rescaled absolute point bands (`RescaledBand`)

pub mod types;

pub use types::*;
