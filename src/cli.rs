use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Coding style checker - enforce whitespace and layout rules")]
#[command(long_about = "A tool that checks source files against project style rules.\n\n\
    Exit codes:\n  \
    0 - No style violations\n  \
    1 - Style violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Check a single file (tree roots and exclusions are ignored)
    pub path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Scan these roots instead of the configured ones (can be specified multiple times)
    #[arg(short, long)]
    pub root: Vec<PathBuf>,

    /// Additional exclusion prefixes (can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<PathBuf>,

    /// File extensions to check (comma-separated, e.g., c,h,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Maximum line length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rule catalog and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Suppress report rendering (exit status only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase output verbosity (-v lists clean files)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
