//! FILENAME: app/src/lib.rs
// PURPOSE: Library side of the command-line front end.
// CONTEXT: main.rs only parses arguments and prints; everything it calls
//          lives here so integration tests can reach it.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::PlotReport;
pub use config::{AppConfig, OutputFormat};
pub use error::AppError;

#[derive(Debug, Parser)]
#[command(name = "calc", version, about = "PEMDAS calculator and function grapher")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate an arithmetic expression
    Calc {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Sample one or more functions of x, e.g. "f(x) = x^2" "sin(x)"
    Plot {
        #[arg(required = true)]
        expressions: Vec<String>,

        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,

        /// Number of samples per function
        #[arg(long)]
        points: Option<usize>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the normalized token sequence of an expression
    Tokens {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
}

/// Output of one run: what goes to stdout and what goes to stderr.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub stdout: String,
    pub stderr: Vec<String>,
}

/// Loads configuration, sets up logging and runs the selected command.
pub fn run(cli: Cli) -> Result<Output, AppError> {
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| config.log_file.clone());
    logging::init(cli.verbose, log_file.as_deref())?;

    crate::log_info!("SYS", "calc starting, command={:?}", cli.command);

    match cli.command {
        Command::Calc { expression } => Ok(Output {
            stdout: commands::calc(&expression)?,
            stderr: Vec::new(),
        }),
        Command::Plot {
            expressions,
            min,
            max,
            points,
            format,
        } => {
            let mut range = config.graph;
            range.x_min = min.unwrap_or(range.x_min);
            range.x_max = max.unwrap_or(range.x_max);
            range.sample_count = points.unwrap_or(range.sample_count);

            let report = commands::plot(&expressions, range, format.unwrap_or(config.output))?;
            Ok(Output {
                stdout: report.rendered,
                stderr: report.notes,
            })
        }
        Command::Tokens { expression } => Ok(Output {
            stdout: commands::tokens(&expression)?,
            stderr: Vec::new(),
        }),
    }
}
