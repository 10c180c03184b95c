//! Free-text assignment list parsing.
//!
//! Turns lines such as `400 x 2 major projects (projects)` into
//! `AssignmentRecord`s and a running point total. Malformed lines are skipped
//! rather than reported.

pub mod parser;

pub use parser::*;
