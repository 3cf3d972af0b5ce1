//! dbcheck library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod report;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Report => cli::commands::report::handle(cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // The environment is read exactly once, here. Everything below this
    // point works from the resolved Config.
    let mut cfg = Config::from_env();

    if let Some(host) = &cli.host {
        cfg.host = host.clone();
    }
    if let Some(database) = &cli.database {
        cfg.database = database.clone();
    }
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }
    if let Some(password) = &cli.password {
        cfg.password = password.clone();
    }

    dispatch(&cli, &cfg)
}
