//! rTimesheet library root.
//! Exposes the timesheet core, data providers, payroll export and the CLI
//! dispatcher used by `main.rs`.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Approve { .. } | Commands::Reject { .. } => {
            cli::commands::review::handle(&cli.command, cfg)
        }
        Commands::Review { .. } => cli::commands::review::handle_filtered(&cli.command, cfg),
        Commands::Payroll { .. } => cli::commands::payroll::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line dataset override
    if let Some(custom) = &cli.data {
        cfg.dataset = custom.clone();
    }

    dispatch(&cli, &cfg)
}
