// crates/clean_dashboard/src/main.rs

use anyhow::Result;
use clap::Parser;

use clean_dashboard::{clean_dashboard, init_logging, report, AppConfig, Cli};

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());
    init_logging(config.verbose);

    let outcome = clean_dashboard(&config)?;
    for line in report::render(&outcome) {
        println!("{}", line);
    }

    Ok(())
}
