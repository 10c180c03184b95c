//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parsing/rescaling code and from command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "syllabuster",
    version,
    about = "Turn an assignment list into a point breakdown, a letter grade scale, and a chart"
)]
pub struct Cli {
    /// YAML config holding the grade scale (and optional default assignments).
    #[arg(long, global = true, env = "SYLLABUSTER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse assignments, write the markdown and chart, and print the markdown.
    Generate(GenerateArgs),
    /// Print the letter grade scale for a given point total.
    Scale(ScaleArgs),
    /// Launch the interactive form.
    Tui(TuiArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Assignment list file, one assignment per line (`-` reads stdin).
    ///
    /// Defaults to the `assignments` list in the config.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Markdown output path (overrides the config).
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// SVG chart output path (overrides the config).
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Skip writing the chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Also export assignments and the rescaled scale as JSON.
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Print an ASCII bar plot of the distribution.
    #[arg(long)]
    pub plot: bool,

    /// Bar plot width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}

#[derive(Debug, Args, Clone)]
pub struct ScaleArgs {
    /// Total points available in the semester.
    #[arg(short, long)]
    pub points: f64,
}

#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    /// Write logs to this file (the form owns the terminal otherwise).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
