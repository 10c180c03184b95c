//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - loads the YAML config
//! - runs the parse/rescale pipeline
//! - prints markdown/plots and writes output files
//! - launches the TUI

use std::io::Read;
use std::path::Path;

use clap::Parser;

use crate::cli::{Command, GenerateArgs, ScaleArgs, TuiArgs};
use crate::config::{Config, load_config};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `syllabuster` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `syllabuster` with no subcommand opens the form, like `syllabuster tui`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match &cli.command {
        Command::Tui(TuiArgs { log_file: Some(path) }) => crate::logging::init_file(path)?,
        Command::Tui(_) => {}
        _ => crate::logging::init_stderr(),
    }

    let config = load_config(&cli.config)?;

    match cli.command {
        Command::Generate(args) => handle_generate(&args, &config),
        Command::Scale(args) => handle_scale(&args, &config),
        Command::Tui(_) => crate::tui::run(config),
    }
}

fn handle_generate(args: &GenerateArgs, config: &Config) -> Result<(), AppError> {
    let lines = match &args.input {
        Some(path) => read_lines(path)?,
        None => config.assignments.clone(),
    };
    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(AppError::input(
            "No assignments given. Pass --input FILE, pipe them with --input -, \
             or list `assignments` in the config.",
        ));
    }

    let run = pipeline::run(&lines, &config.scale);

    let mut paths = config.output.clone();
    if let Some(path) = &args.markdown {
        paths.markdown = path.clone();
    }
    if let Some(path) = &args.chart {
        paths.chart = path.clone();
    }

    let markdown = pipeline::write_outputs(&run, &paths, &config.late_policy, !args.no_chart)?;
    println!("{markdown}");

    if args.plot {
        println!("{}", crate::plot::render_bar_plot(&run.chart_values(), args.width));
    }

    if let Some(path) = &args.export_json {
        crate::io::write_run_json(path, &run.assignments, &run.bands)?;
    }

    Ok(())
}

fn handle_scale(args: &ScaleArgs, config: &Config) -> Result<(), AppError> {
    if !(args.points.is_finite() && args.points >= 0.0) {
        return Err(AppError::input(format!(
            "Invalid point total {}: expected a non-negative number.",
            args.points
        )));
    }

    let bands = crate::scale::rescale(config.scale.bands(), args.points);
    println!("{}", crate::report::scale_section(&bands));
    Ok(())
}

/// Read assignment lines from a file, or from stdin when `path` is `-`.
fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::input(format!("Failed to read stdin: {e}")))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| AppError::input(format!("Failed to read '{}': {e}", path.display())))?
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Rewrite argv so `syllabuster` defaults to `syllabuster tui`.
///
/// Rules:
/// - `syllabuster`                     -> `syllabuster tui`
/// - `syllabuster --config c.yaml ...` -> `syllabuster tui --config c.yaml ...`
/// - `syllabuster --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "scale" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
