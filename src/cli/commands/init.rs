use crate::cli::parser::Cli;
use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty JSON dataset, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    info("Initializing rTimesheet…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Dataset     : {}", cfg.dataset));

    if Dataset::create_empty(Path::new(&cfg.dataset))? {
        success(format!("Empty dataset created at {}", cfg.dataset));
    } else {
        info("Dataset already exists, left untouched");
    }

    tracing::info!(dataset = %cfg.dataset, test = cli.test, "initialized");
    success("rTimesheet initialization completed!");
    Ok(())
}
