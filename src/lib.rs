//! `syllabuster` library crate.
//!
//! The binary (`syllabuster`) is a thin wrapper around this library so that:
//!
//! - the assignment parser and grade scale rescaler are testable without spawning processes
//! - the CLI and the TUI share one pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod assignment;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod scale;
pub mod tui;
