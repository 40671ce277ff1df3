// crates/clean_dashboard/src/config.rs

use std::path::PathBuf;

use clap::Parser;
use dashboard_markers::{default_closing_lines, DEFAULT_INPUT, DEFAULT_OUTPUT, LEGACY_BOUNDARY_MARKER};

/// Command-line surface. Every option has a default so a bare invocation
/// cleans `dashboard.php` in the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "clean_dashboard",
    version,
    about = "Removes the legacy photo-management code from the end of dashboard.php"
)]
pub struct Cli {
    /// File to read.
    #[arg(long, value_name = "PATH", env = "CLEAN_DASHBOARD_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File to write. Overwritten if present; must differ from the input.
    #[arg(long, value_name = "PATH", env = "CLEAN_DASHBOARD_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Literal text whose first occurrence marks where the kept part ends.
    #[arg(long, value_name = "TEXT", env = "CLEAN_DASHBOARD_MARKER", default_value = LEGACY_BOUNDARY_MARKER)]
    pub marker: String,

    /// Line appended after the kept part. Repeat for several lines; replaces
    /// the default closing tags.
    #[arg(long = "closing-line", value_name = "TEXT", action = clap::ArgAction::Append)]
    pub closing_lines: Vec<String>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

/// Runtime configuration resolved from the CLI and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub marker: String,
    pub closing_lines: Vec<String>,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            marker: LEGACY_BOUNDARY_MARKER.to_string(),
            closing_lines: default_closing_lines(),
            verbose: false,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let closing_lines = if cli.closing_lines.is_empty() {
            default_closing_lines()
        } else {
            cli.closing_lines
        };
        Self {
            input: cli.input,
            output: cli.output,
            marker: cli.marker,
            closing_lines,
            verbose: cli.verbose,
        }
    }
}
