use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when it already exists)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing worktime…");

    if cli.test {
        info("Test mode: configuration file left untouched.");
    } else if config_path.exists() {
        info(format!("Config file : {} (kept)", config_path.display()));
    } else {
        cfg.save(config_path)?;
        success(format!("Config file : {}", config_path.display()));
    }

    let db_path = cfg.database_path();
    let pool = DbPool::new(db_path)?;
    success(format!("Database    : {db_path}"));

    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {db_path}"),
    );

    println!("🎉 worktime initialization completed!");
    Ok(())
}
