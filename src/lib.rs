//! worktime library root.
//! Exposes the records/settings state model, its derivations (latest values,
//! monthly statistics, CSV), import/export and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &mut Config, config_path: &Path) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg, config_path),
        Commands::Start { .. } | Commands::Stop { .. } => commands::clock::handle(&cli.command, cfg),
        Commands::Memo { .. } => commands::memo::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Csv { .. } | Commands::Mail { .. } => commands::csv::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg, config_path),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg, config_path),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::load(&config_path)?;
    cfg.database_override = cli.db.clone();

    dispatch(&cli, &mut cfg, &config_path)
}
