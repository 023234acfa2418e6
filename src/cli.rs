//! CLI argument definitions for yeartab.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use yeartab::config::OutputFormat;
use yeartab::workbook::DocumentFormat;

#[derive(Parser)]
#[command(name = "yeartab")]
#[command(version)]
#[command(about = "Multi-year monthly tables with quarterly and YTD aggregates", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    yeartab template --rows 2 --rows 1 > book.yaml   Write an empty workbook\n    yeartab check book.yaml                         Validate and compute aggregates\n    yeartab session                                 Fill tables interactively"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create .yeartab/config.md in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Validate a workbook and print its quarterly and YTD aggregates
    ///
    /// Exits with a non-zero status when the tables do not agree.
    Check {
        /// Workbook file (.yaml, .yml or .json)
        file: PathBuf,
        /// Output format (defaults to output.format from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Year shown in row 1 (overrides the workbook and config)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print an empty workbook
    Template {
        /// Rows (years) per table; repeat once per table
        #[arg(long = "rows", value_name = "N", default_values_t = [1usize])]
        rows: Vec<usize>,
        /// Document format
        #[arg(long, value_enum, default_value_t = DocumentFormat::Yaml)]
        format: DocumentFormat,
    },
    /// Fill tables interactively from standard input
    Session {
        /// Year shown in row 1 (overrides config)
        #[arg(long)]
        year: Option<i32>,
        /// Start from an existing workbook
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short = 'b')]
        build: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
