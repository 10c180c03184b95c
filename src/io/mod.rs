//! Output writers.
//!
//! - markdown + JSON exports (`export`)
//! - SVG pie chart (`chart`)

pub mod chart;
pub mod export;

pub use chart::*;
pub use export::*;
