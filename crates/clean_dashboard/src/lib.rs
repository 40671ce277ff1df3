// crates/clean_dashboard/src/lib.rs

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use truncate_at_marker::{Outcome, Truncator};

pub mod config;
pub mod report;

pub use config::{AppConfig, Cli};

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Fails only when a global subscriber is already installed; keep that one.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Cleans the configured input file. A missing boundary is reported through
/// the returned [`Outcome`]; only I/O and configuration problems are errors.
pub fn clean_dashboard(config: &AppConfig) -> Result<Outcome> {
    debug!(?config, "resolved configuration");

    let truncator = Truncator::new(config.marker.as_str(), config.closing_lines.clone())
        .context("Invalid boundary marker")?;
    let outcome = truncator
        .run(&config.input, &config.output)
        .with_context(|| format!("Failed to clean {}", config.input.display()))?;

    if let Outcome::Truncated(report) = outcome {
        info!(
            output = %config.output.display(),
            lines_removed = report.lines_removed,
            "wrote cleaned dashboard"
        );
    }
    Ok(outcome)
}
